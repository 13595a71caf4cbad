use crate::domain::plan::Plan;

/// Data required to render the subscription-plan cards.
pub struct PlansPageData {
    pub plans: Vec<Plan>,
}
