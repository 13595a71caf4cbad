use validator::Validate;

use crate::SERVICE_ACCESS_ROLE;
use crate::api::{Mutation, PlanApi};
use crate::domain::plan::Plan;
use crate::domain::types::RecordId;
use crate::dto::plans::PlansPageData;
use crate::forms::plans::{DeletePlanForm, PlanForm};
use crate::models::auth::AuthenticatedUser;
use crate::routes::check_role;
use crate::services::{ServiceError, ServiceResult, form_error};

/// Loads every subscription plan for the manage-subscription screen.
pub async fn load_plans_page<A>(
    api: &A,
    user: &AuthenticatedUser,
) -> ServiceResult<PlansPageData>
where
    A: PlanApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let plans = api.list_plans().await?;
    Ok(PlansPageData { plans })
}

/// Creates a plan, or updates one when the form carries an id.
pub async fn save_plan<A>(
    api: &A,
    user: &AuthenticatedUser,
    form: &PlanForm,
) -> ServiceResult<Mutation<Plan>>
where
    A: PlanApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    if let Err(e) = form.validate() {
        log::error!("Failed to validate plan form: {e}");
        return Err(form_error(&e));
    }

    let payload = form.to_plan_payload()?;

    match &form.id {
        Some(id) if !id.is_empty() => {
            let id = RecordId::new(id.as_str())?;
            api.update_plan(&id, &payload).await.map_err(Into::into)
        }
        _ => api.create_plan(&payload).await.map_err(Into::into),
    }
}

/// Deletes a plan.
pub async fn remove_plan<A>(
    api: &A,
    user: &AuthenticatedUser,
    form: &DeletePlanForm,
) -> ServiceResult<Mutation<()>>
where
    A: PlanApi + ?Sized,
{
    if !check_role(SERVICE_ACCESS_ROLE, &user.roles) {
        return Err(ServiceError::Unauthorized);
    }

    let id = RecordId::new(form.id.as_str())?;
    api.delete_plan(&id).await.map_err(Into::into)
}
