use serde::Deserialize;
use validator::Validate;

use crate::domain::plan::{NewPlan, PlanFeatures, PlanLimits, Validity, ValidityKind};
use crate::domain::types::TypeConstraintError;

/// HTML checkboxes arrive as `on` when ticked and are absent otherwise.
fn checked(value: &Option<String>) -> bool {
    value.is_some()
}

#[derive(Deserialize, Validate)]
/// Create/update form for a subscription plan.
pub struct PlanForm {
    /// Present when editing an existing plan.
    pub id: Option<String>,
    #[validate(length(min = 3, message = "Plan name must be at least 3 characters"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Cost cannot be negative"))]
    pub cost: f64,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    pub team_members: Option<String>,
    #[serde(default)]
    pub shared_calendar: Option<String>,
    #[serde(default)]
    pub task_hub: Option<String>,
    #[serde(default)]
    pub grant_permission_access: Option<String>,
    #[serde(default)]
    pub service_max: u32,
    #[serde(default)]
    pub product_max: u32,
    #[serde(default)]
    pub highlight_offer_max: u32,
    #[serde(default)]
    pub transaction_fee: f64,
    pub validity_type: String,
    #[serde(default)]
    pub duration_in_months: Option<String>,
}

impl PlanForm {
    fn validity(&self) -> Result<Validity, TypeConstraintError> {
        let kind = match self.validity_type.as_str() {
            "unlimited" => ValidityKind::Unlimited,
            "1month" => ValidityKind::OneMonth,
            "3month" => ValidityKind::ThreeMonths,
            "6month" => ValidityKind::SixMonths,
            "custom" => ValidityKind::Custom,
            other => {
                return Err(TypeConstraintError::InvalidValue(format!(
                    "unknown validity type: {other}"
                )));
            }
        };

        let duration = self
            .duration_in_months
            .as_ref()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        if kind == ValidityKind::Custom && duration.is_none() {
            return Err(TypeConstraintError::InvalidValue(
                "custom validity requires a duration".to_string(),
            ));
        }

        Ok(Validity {
            kind,
            duration_in_months: duration,
        })
    }

    /// Converts the validated form into the backend payload.
    pub fn to_plan_payload(&self) -> Result<NewPlan, TypeConstraintError> {
        Ok(NewPlan {
            name: self.name.trim().to_string(),
            cost: self.cost,
            description: self.description.trim().to_string(),
            features: PlanFeatures {
                team_members: checked(&self.team_members),
                shared_calendar: checked(&self.shared_calendar),
                task_hub: checked(&self.task_hub),
                grant_permission_access: checked(&self.grant_permission_access),
            },
            limits: PlanLimits {
                service_max: self.service_max,
                product_max: self.product_max,
                highlight_offer_max: self.highlight_offer_max,
                transaction_fee: self.transaction_fee,
            },
            validity: self.validity()?,
        })
    }
}

#[derive(Deserialize, Validate)]
/// Delete confirmation for a plan.
pub struct DeletePlanForm {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> PlanForm {
        PlanForm {
            id: None,
            name: "Pro".to_string(),
            cost: 29.0,
            description: "Full access".to_string(),
            team_members: Some("on".to_string()),
            shared_calendar: None,
            task_hub: None,
            grant_permission_access: None,
            service_max: 10,
            product_max: 20,
            highlight_offer_max: 3,
            transaction_fee: 2.5,
            validity_type: "1month".to_string(),
            duration_in_months: None,
        }
    }

    #[test]
    fn checkbox_presence_maps_to_feature_flags() {
        let payload = base_form().to_plan_payload().unwrap();
        assert!(payload.features.team_members);
        assert!(!payload.features.shared_calendar);
        assert_eq!(payload.validity.kind, ValidityKind::OneMonth);
    }

    #[test]
    fn custom_validity_requires_duration() {
        let mut form = base_form();
        form.validity_type = "custom".to_string();
        assert!(form.to_plan_payload().is_err());

        form.duration_in_months = Some("9".to_string());
        let payload = form.to_plan_payload().unwrap();
        assert_eq!(payload.validity.duration_in_months.as_deref(), Some("9"));
    }

    #[test]
    fn unknown_validity_type_is_rejected() {
        let mut form = base_form();
        form.validity_type = "forever".to_string();
        assert!(form.to_plan_payload().is_err());
    }
}
