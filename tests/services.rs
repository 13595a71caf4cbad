use chrono::Utc;
use mockall::predicate;

use markethub_admin::SERVICE_ACCESS_ROLE;
use markethub_admin::api::mock::MockApi;
use markethub_admin::api::{ApiError, Mutation};
use markethub_admin::domain::support::{SupportTicket, TicketReply};
use markethub_admin::domain::types::RecordId;
use markethub_admin::domain::user::{AccountStatus, Role, User};
use markethub_admin::forms::support::ReplyTicketForm;
use markethub_admin::listing::{ListQuery, Page};
use markethub_admin::models::auth::AuthenticatedUser;
use markethub_admin::services::{ServiceError, accounts, main as main_service, support};

const TICKET_ID: &str = "64f1a2b3c4d5e6f7a8b9c0d1";
const ACCOUNT_ID: &str = "64f1a2b3c4d5e6f7a8b9c0d2";

fn admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "1".to_string(),
        email: "admin@example.com".to_string(),
        name: "Admin".to_string(),
        roles: vec![SERVICE_ACCESS_ROLE.to_string()],
        exp: 0,
        token: String::new(),
    }
}

fn viewer_user() -> AuthenticatedUser {
    AuthenticatedUser {
        roles: vec!["viewer".to_string()],
        ..admin_user()
    }
}

fn ticket(id: &str) -> SupportTicket {
    SupportTicket {
        id: RecordId::new(id).unwrap(),
        first_name: "James".to_string(),
        last_name: "Anderson".to_string(),
        email: "james.anderson@example.com".to_string(),
        message: "I cannot access my account.".to_string(),
        message_reply: None,
        follow: None,
        is_deleted: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn account(id: &str, status: AccountStatus) -> User {
    User {
        id: RecordId::new(id).unwrap(),
        first_name: "Sophia".to_string(),
        last_name: "Martinez".to_string(),
        full_name: None,
        email: "sophia.martinez@example.com".to_string(),
        phone: Some("+15551234567".to_string()),
        role: Role::User,
        image: None,
        country: None,
        status,
        is_deleted: false,
        is_verified: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[actix_web::test]
async fn reply_success_sends_exactly_one_patch() {
    let mut api = MockApi::new();
    let expected_id = RecordId::new(TICKET_ID).unwrap();
    let expected_reply = TicketReply {
        message_reply: "Thanks for reaching out".to_string(),
    };

    api.expect_reply_ticket()
        .with(predicate::eq(expected_id), predicate::eq(expected_reply))
        .times(1)
        .returning(|id, reply| {
            let mut updated = ticket(&id.to_string());
            updated.message_reply = Some(reply.message_reply.clone());
            Ok(Mutation {
                message: Some("Support message replied successfully!".to_string()),
                record: updated,
            })
        });

    let form = ReplyTicketForm {
        id: TICKET_ID.to_string(),
        message_reply: "Thanks for reaching out".to_string(),
    };

    let mutation = support::reply_to_ticket(&api, &admin_user(), &form)
        .await
        .unwrap();

    assert_eq!(
        mutation.message.as_deref(),
        Some("Support message replied successfully!")
    );
    assert_eq!(
        mutation.record.message_reply.as_deref(),
        Some("Thanks for reaching out")
    );
}

#[actix_web::test]
async fn reply_failure_surfaces_backend_message_and_skips_refetch() {
    let mut api = MockApi::new();

    // No list_tickets expectation: a refetch after the failed mutation
    // would panic the mock.
    api.expect_reply_ticket().times(1).returning(|_, _| {
        Err(ApiError::Rejected {
            status: 422,
            message: "Reply too short".to_string(),
        })
    });

    let form = ReplyTicketForm {
        id: TICKET_ID.to_string(),
        message_reply: "ok".to_string(),
    };

    let err = support::reply_to_ticket(&api, &admin_user(), &form)
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Reply too short");
}

#[actix_web::test]
async fn empty_reply_is_blocked_before_any_network_call() {
    // No expectations at all: any adapter call panics.
    let api = MockApi::new();

    let form = ReplyTicketForm {
        id: TICKET_ID.to_string(),
        message_reply: String::new(),
    };

    let err = support::reply_to_ticket(&api, &admin_user(), &form)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Form(_)));
    assert_eq!(err.user_message(), "Reply message is required");
}

#[actix_web::test]
async fn role_check_blocks_list_and_mutations() {
    let api = MockApi::new();
    let viewer = viewer_user();

    let err = support::load_support_page(&api, &viewer, ListQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));

    let form = ReplyTicketForm {
        id: TICKET_ID.to_string(),
        message_reply: "hello".to_string(),
    };
    let err = support::reply_to_ticket(&api, &viewer, &form)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));
}

#[actix_web::test]
async fn status_toggle_round_trips_between_blocked_and_ongoing() {
    let mut api = MockApi::new();

    api.expect_get_user()
        .times(1)
        .returning(|id| Ok(Some(account(&id.to_string(), AccountStatus::Blocked))));
    api.expect_change_user_status()
        .with(
            predicate::eq(RecordId::new(ACCOUNT_ID).unwrap()),
            predicate::eq(AccountStatus::Ongoing),
        )
        .times(1)
        .returning(|id, status| {
            Ok(Mutation {
                message: Some("Status updated".to_string()),
                record: account(&id.to_string(), status),
            })
        });

    let mutation = accounts::toggle_account_status(&api, &admin_user(), ACCOUNT_ID)
        .await
        .unwrap();
    assert_eq!(mutation.record.status, AccountStatus::Ongoing);

    // Toggling again from the new state moves back to blocked.
    let mut api = MockApi::new();
    api.expect_get_user()
        .times(1)
        .returning(|id| Ok(Some(account(&id.to_string(), AccountStatus::Ongoing))));
    api.expect_change_user_status()
        .with(
            predicate::eq(RecordId::new(ACCOUNT_ID).unwrap()),
            predicate::eq(AccountStatus::Blocked),
        )
        .times(1)
        .returning(|id, status| {
            Ok(Mutation {
                message: None,
                record: account(&id.to_string(), status),
            })
        });

    let mutation = accounts::toggle_account_status(&api, &admin_user(), ACCOUNT_ID)
        .await
        .unwrap();
    assert_eq!(mutation.record.status, AccountStatus::Blocked);
}

#[actix_web::test]
async fn confirmed_accounts_have_no_toggle() {
    let mut api = MockApi::new();

    // change_user_status has no expectation: reaching it would panic.
    api.expect_get_user()
        .times(1)
        .returning(|id| Ok(Some(account(&id.to_string(), AccountStatus::Confirmed))));

    let err = accounts::toggle_account_status(&api, &admin_user(), ACCOUNT_ID)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::TypeConstraint(_)));
}

#[actix_web::test]
async fn list_fetch_failure_is_an_explicit_error_not_a_hang() {
    let mut api = MockApi::new();
    api.expect_list_tickets()
        .times(1)
        .returning(|_| Err(ApiError::Transport("connection refused".to_string())));

    let err = support::load_support_page(&api, &admin_user(), ListQuery::default())
        .await
        .unwrap_err();

    // Transport detail is not leaked to the user.
    assert_eq!(
        err.user_message(),
        "Something went wrong. Please try again later."
    );
}

#[actix_web::test]
async fn dashboard_combines_stats_and_recent_accounts() {
    let mut api = MockApi::new();

    api.expect_dashboard_stats()
        .times(1)
        .returning(|| Ok(Default::default()));
    api.expect_list_users()
        .withf(|query: &ListQuery| query.page == 1 && query.limit == 5)
        .times(1)
        .returning(|_| {
            Ok(Page::new(
                vec![account(ACCOUNT_ID, AccountStatus::Ongoing)],
                1,
            ))
        });

    let data = main_service::load_dashboard(&api, &admin_user())
        .await
        .unwrap();
    assert_eq!(data.recent_users.len(), 1);
}
