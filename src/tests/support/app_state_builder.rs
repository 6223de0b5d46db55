use crate::auth::application::use_cases::verify_registration::IVerifyRegistrationUseCase;
use crate::tests::support::stubs::StubVerifyRegistrationUseCase;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    verify_registration: Arc<dyn IVerifyRegistrationUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            verify_registration: Arc::new(StubVerifyRegistrationUseCase::succeeding()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_verify_registration(
        mut self,
        use_case: impl IVerifyRegistrationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verify_registration = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            verify_registration_use_case: self.verify_registration,
        })
    }
}
