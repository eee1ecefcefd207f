//! Shared test doubles for the signup pipeline.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use signup_api::api::controllers::SignUpController;
use signup_api::domain::{AccountCreationInput, AccountCreationRequest, AccountId, StoredAccount};
use signup_api::errors::{AppError, AppResult};
use signup_api::infra::{AccountRepository, CredentialHasher};
use signup_api::services::AccountCreator;
use signup_api::validation::EmailValidator;

/// Detail planted in collaborator faults; must never reach a response body.
pub const LEAKED_DETAIL: &str = "db password is hunter2";

/// Shared record of collaborator calls, in order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

#[derive(Clone, Copy)]
pub enum EmailOutcome {
    Valid,
    Invalid,
    Fault,
}

/// Email checker returning a fixed outcome
pub struct EmailValidatorStub {
    outcome: EmailOutcome,
    calls: Mutex<Vec<String>>,
}

impl EmailValidatorStub {
    pub fn new(outcome: EmailOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl EmailValidator for EmailValidatorStub {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        self.calls.lock().unwrap().push(email.to_string());
        match self.outcome {
            EmailOutcome::Valid => Ok(true),
            EmailOutcome::Invalid => Ok(false),
            EmailOutcome::Fault => Err(AppError::email_check(LEAKED_DETAIL)),
        }
    }
}

/// Hasher mapping `x` to `hashed_x`
pub struct HasherStub {
    fail: bool,
    log: CallLog,
    calls: Mutex<Vec<String>>,
}

impl HasherStub {
    pub fn new(log: CallLog) -> Self {
        Self {
            fail: false,
            log,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(log: CallLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CredentialHasher for HasherStub {
    async fn encrypt(&self, plaintext: &str) -> AppResult<String> {
        self.log.lock().unwrap().push("hash".to_string());
        self.calls.lock().unwrap().push(plaintext.to_string());
        if self.fail {
            return Err(AppError::hashing(LEAKED_DETAIL));
        }
        Ok(format!("hashed_{}", plaintext))
    }
}

/// Store assigning the fixed id `id1`
pub struct StoreStub {
    fail: bool,
    log: CallLog,
    calls: Mutex<Vec<AccountCreationInput>>,
}

impl StoreStub {
    pub fn new(log: CallLog) -> Self {
        Self {
            fail: false,
            log,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(log: CallLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }

    pub fn calls(&self) -> Vec<AccountCreationInput> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountRepository for StoreStub {
    async fn add(&self, input: AccountCreationInput) -> AppResult<StoredAccount> {
        self.log.lock().unwrap().push("store".to_string());
        self.calls.lock().unwrap().push(input.clone());
        if self.fail {
            return Err(AppError::internal(LEAKED_DETAIL));
        }
        Ok(StoredAccount {
            id: AccountId::new("id1"),
            name: input.name,
            email: input.email,
            password: input.password,
        })
    }
}

/// System under test plus handles on its collaborators
pub struct Sut {
    pub controller: SignUpController,
    pub email_validator: Arc<EmailValidatorStub>,
    pub hasher: Arc<HasherStub>,
    pub store: Arc<StoreStub>,
    pub log: CallLog,
}

pub fn make_sut_with(
    email: EmailOutcome,
    hasher: fn(CallLog) -> HasherStub,
    store: fn(CallLog) -> StoreStub,
) -> Sut {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let email_validator = Arc::new(EmailValidatorStub::new(email));
    let hasher = Arc::new(hasher(log.clone()));
    let store = Arc::new(store(log.clone()));

    let add_account = Arc::new(AccountCreator::new(hasher.clone(), store.clone()));
    let controller = SignUpController::new(email_validator.clone(), add_account);

    Sut {
        controller,
        email_validator,
        hasher,
        store,
        log,
    }
}

pub fn make_sut() -> Sut {
    make_sut_with(EmailOutcome::Valid, HasherStub::new, StoreStub::new)
}

pub fn ana_request() -> AccountCreationRequest {
    AccountCreationRequest {
        name: Some("Ana".to_string()),
        email: Some("ana@x.com".to_string()),
        password: Some("secret".to_string()),
        password_confirmation: Some("secret".to_string()),
    }
}
