use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    VerifyRegistrationRequest, VerifyRegistrationResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Credence Signup API",
        version = "1.0.0",
        description = "Registration verification for the Credence signup flow",
        contact(
            name = "API Support",
            email = "support@credence-app.com"
        )
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::verify_registration::verify_registration_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<VerifyRegistrationResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            VerifyRegistrationRequest,
            VerifyRegistrationResponse,
        )
    ),
    tags(
        (name = "auth", description = "Signup and registration verification")
    )
)]
pub struct ApiDoc;
