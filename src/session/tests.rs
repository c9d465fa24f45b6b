use super::*;
use std::cell::RefCell;
use std::rc::Rc;

// =========================================================
// Mock substrate
// =========================================================

struct TestContext {
    /// Operation log to verify calling order.
    log: RefCell<Vec<String>>,
    token: RefCell<Option<String>>,
    email: RefCell<Option<String>>,
}

impl TestContext {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            log: RefCell::new(Vec::new()),
            token: RefCell::new(None),
            email: RefCell::new(None),
        })
    }

    fn push_log(&self, msg: &str) {
        self.log.borrow_mut().push(msg.to_string());
    }
}

struct TestStorage {
    ctx: Rc<TestContext>,
}

impl SessionStorageAdapter for TestStorage {
    fn token(&self) -> Option<String> {
        self.ctx.push_log("token:get");
        self.ctx.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        self.ctx.push_log("token:set");
        *self.ctx.token.borrow_mut() = Some(token.to_string());
    }

    fn clear_token(&self) {
        self.ctx.push_log("token:clear");
        *self.ctx.token.borrow_mut() = None;
    }

    fn email(&self) -> Option<String> {
        self.ctx.push_log("email:get");
        self.ctx.email.borrow().clone()
    }

    fn set_email(&self, email: &str) {
        self.ctx.push_log("email:set");
        *self.ctx.email.borrow_mut() = Some(email.to_string());
    }

    fn clear_email(&self) {
        self.ctx.push_log("email:clear");
        *self.ctx.email.borrow_mut() = None;
    }
}

fn make_store() -> (Rc<TestContext>, CredentialStore<TestStorage>) {
    let ctx = TestContext::new();
    let store = CredentialStore::new(TestStorage { ctx: ctx.clone() });
    (ctx, store)
}

// =========================================================
// Tests
// =========================================================

#[test]
fn fresh_store_has_no_session() {
    let (_ctx, store) = make_store();
    assert!(store.read().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn write_then_read_round_trips_the_credential() {
    let (_ctx, store) = make_store();
    let credential = Credential::new("tok-1", Some("amy@example.com".to_string()));

    store.write(&credential);

    assert!(store.is_authenticated());
    assert_eq!(store.read(), Some(credential));
}

#[test]
fn write_without_email_clears_a_previous_one() {
    let (_ctx, store) = make_store();
    store.write(&Credential::new("tok-1", Some("amy@example.com".to_string())));

    store.write(&Credential::new("tok-2", None));

    let read = store.read().unwrap();
    assert_eq!(read.token, "tok-2");
    assert!(read.email.is_none());
}

#[test]
fn clear_removes_every_field() {
    let (ctx, store) = make_store();
    store.write(&Credential::new("tok-1", Some("amy@example.com".to_string())));

    store.clear();

    assert!(store.read().is_none());
    assert!(!store.is_authenticated());
    assert!(ctx.token.borrow().is_none());
    assert!(ctx.email.borrow().is_none());
}

#[test]
fn clear_touches_both_token_and_email() {
    let (ctx, store) = make_store();
    store.clear();
    let log = ctx.log.borrow();
    assert!(log.contains(&"token:clear".to_string()));
    assert!(log.contains(&"email:clear".to_string()));
}

#[test]
fn an_empty_token_does_not_count_as_signed_in() {
    let (ctx, store) = make_store();
    *ctx.token.borrow_mut() = Some(String::new());

    assert!(!store.is_authenticated());
    assert!(store.read().is_none());
}

#[test]
fn a_bare_token_without_email_still_signs_in() {
    let (ctx, store) = make_store();
    *ctx.token.borrow_mut() = Some("legacy-token".to_string());

    let credential = store.read().unwrap();
    assert_eq!(credential.token, "legacy-token");
    assert!(credential.email.is_none());
    assert_eq!(credential.display_name(), "Guest");
}

#[test]
fn reads_never_write() {
    let (ctx, store) = make_store();
    let _ = store.read();
    let _ = store.is_authenticated();
    let log = ctx.log.borrow();
    assert!(
        log.iter()
            .all(|entry| entry.ends_with(":get"))
    );
}
