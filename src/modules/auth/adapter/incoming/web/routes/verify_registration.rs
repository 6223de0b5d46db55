use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::RegistrationRequest;
use crate::auth::application::use_cases::verify_registration::{
    RegistrationFailure, VerifyRegistrationError,
};
use crate::email::application::domain::mask_address;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for registration verification
#[derive(Serialize, Deserialize, ToSchema)]
pub struct VerifyRegistrationRequest {
    /// Requested username
    #[schema(example = "alice")]
    pub username: String,

    /// Email address the verification link is sent to
    #[schema(example = "alice@x.com")]
    pub email: String,

    /// Link embedded in the verification email
    #[schema(example = "https://app.credence-app.com/auth/register/abc123")]
    pub verification_url: String,
}

#[derive(Serialize, ToSchema)]
pub struct VerifyRegistrationResponse {
    /// Confirmation message
    #[schema(example = "Verification email sent. Please check your inbox to continue registration.")]
    message: String,

    /// Username that was checked
    #[schema(example = "alice")]
    username: String,

    /// Address the email was sent to
    #[schema(example = "alice@x.com")]
    email: String,
}

fn map_verify_registration_error(
    err: VerifyRegistrationError,
    req: &VerifyRegistrationRequest,
) -> HttpResponse {
    match err {
        VerifyRegistrationError::Invalid(invalid) => match invalid.cause() {
            RegistrationFailure::UsernameTaken | RegistrationFailure::EmailTaken => {
                warn!(
                    username = %req.username,
                    email = %mask_address(&req.email),
                    code = invalid.code(),
                    "Registration details already claimed"
                );
                ApiResponse::conflict(invalid.code(), invalid.message())
            }
            RegistrationFailure::DispatchFailed => {
                warn!(
                    username = %req.username,
                    email = %mask_address(&req.email),
                    "Verification email could not be dispatched"
                );
                ApiResponse::bad_request(invalid.code(), invalid.message())
            }
        },

        VerifyRegistrationError::AccountLookupFailed(e) => {
            error!(
                username = %req.username,
                email = %mask_address(&req.email),
                error = %e,
                "Account lookup failed during registration verification"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Verify registration details
///
/// Checks that the username and email are not yet claimed and sends a
/// verification email containing `verification_url`. No account is created.
#[utoipa::path(
    post,
    path = "/api/auth/register/verify",
    tag = "auth",
    request_body = VerifyRegistrationRequest,
    responses(
        (
            status = 202,
            description = "Verification email sent",
            body = inline(SuccessResponse<VerifyRegistrationResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Verification email sent. Please check your inbox to continue registration.",
                    "username": "alice",
                    "email": "alice@x.com"
                }
            })
        ),
        (
            status = 400,
            description = "Verification email could not be sent, or the body is malformed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VERIFICATION_EMAIL_FAILED",
                    "message": "Could not send verification email; please check email address"
                }
            })
        ),
        (
            status = 409,
            description = "Username or email already claimed",
            body = ErrorResponse,
            examples(
                ("Username taken" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "USERNAME_TAKEN",
                        "message": "Username exists"
                    }
                }))),
                ("Email taken" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "EMAIL_TAKEN",
                        "message": "Email already used"
                    }
                })))
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api/auth/register/verify")]
pub async fn verify_registration_handler(
    req: web::Json<VerifyRegistrationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.verify_registration_use_case;

    info!(
        username = %req.username,
        email = %mask_address(&req.email),
        "Registration verification attempt"
    );

    let request = RegistrationRequest::new(
        req.username.clone(),
        req.email.clone(),
        req.verification_url.clone(),
    );

    match use_case.execute(request).await {
        Ok(output) => ApiResponse::accepted(VerifyRegistrationResponse {
            message: output.message,
            username: output.username,
            email: output.email,
        }),
        Err(e) => map_verify_registration_error(e, &req),
    }
}
