//! Canned JSON payloads shared by the test suites.

/// Catalog with a mix of active and inactive domains.
pub const DOMAIN_CATALOG_MIXED: &str = r#"{
    "hydra:member": [
        {"domain": "a.com", "isActive": true, "isPrivate": false},
        {"domain": "b.com", "isActive": false, "isPrivate": false}
    ],
    "hydra:totalItems": 2
}"#;

/// Catalog with several active domains.
pub const DOMAIN_CATALOG_ACTIVE: &str = r#"{
    "hydra:member": [
        {"domain": "a.com", "isActive": true, "isPrivate": false},
        {"domain": "c.com", "isActive": true, "isPrivate": false}
    ]
}"#;

/// Catalog whose entries are all inactive.
pub const DOMAIN_CATALOG_INACTIVE: &str = r#"{
    "hydra:member": [
        {"domain": "b.com", "isActive": false, "isPrivate": false}
    ]
}"#;

/// Empty catalog.
pub const DOMAIN_CATALOG_EMPTY: &str = r#"{"hydra:member": []}"#;

/// Successful `POST /accounts` response.
pub const ACCOUNT_CREATED: &str = r#"{
    "id": "acct-1",
    "address": "user@a.com",
    "quota": 40000000,
    "used": 0,
    "isDisabled": false,
    "isDeleted": false
}"#;

/// Successful `POST /token` response.
pub const TOKEN_OK: &str = r#"{"id": "acct-1", "token": "jwt-token-value"}"#;

/// Successful `GET /me` response.
pub const ME_OK: &str = r#"{"id": "acct-1", "address": "user@a.com"}"#;

/// Provider 422 body for an already-registered address.
pub const ACCOUNT_CONFLICT: &str = r#"{
    "type": "https://tools.ietf.org/html/rfc2616#section-10",
    "title": "An error occurred",
    "detail": "address: This value is already used."
}"#;

/// Inbox listing with two messages, newest first.
pub const MESSAGE_LIST: &str = r#"{
    "hydra:member": [
        {
            "id": "m2",
            "from": {"name": "Bob", "address": "bob@b.com"},
            "subject": "Newest",
            "intro": "Second message...",
            "seen": false,
            "createdAt": "2026-08-28T10:05:00Z"
        },
        {
            "id": "m1",
            "from": {"name": "Alice", "address": "alice@a.com"},
            "subject": "Older",
            "intro": "First message...",
            "seen": true,
            "createdAt": "2026-08-28T10:00:00Z"
        }
    ]
}"#;

/// Message detail carrying HTML fragments.
pub const MESSAGE_DETAIL_HTML: &str = r#"{
    "id": "m2",
    "from": {"name": "Bob", "address": "bob@b.com"},
    "subject": "Newest",
    "intro": "Second message...",
    "seen": true,
    "createdAt": "2026-08-28T10:05:00Z",
    "html": ["<p>Hello</p>", "<p>World</p>"],
    "text": "Hello World"
}"#;

/// Message detail carrying only plain text.
pub const MESSAGE_DETAIL_TEXT: &str = r#"{
    "id": "m1",
    "from": {"name": "Alice", "address": "alice@a.com"},
    "subject": "Older",
    "intro": "First message...",
    "seen": true,
    "text": "Plain body"
}"#;

/// Successful analyzer response.
pub const ANALYSIS_OK: &str = r#"{
    "summary": "Order confirmation from a known retailer.",
    "safetyScore": 93,
    "isPhishing": false,
    "actionRequired": "None"
}"#;
