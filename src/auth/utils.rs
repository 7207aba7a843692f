use actix_identity::Identity;

pub const LOGIN_MESSAGE: &str = "Create Pi-hole dashboard session";

pub fn admin_identity(admin: &str) -> String {
    format!("eth:{}", admin)
}

/// Without a configured admin every visitor counts as logged in.
pub fn auth_required(admin: &str) -> bool {
    !admin.is_empty()
}

pub fn authenticated_as(user: Option<&Identity>, admin: &str) -> bool {
    if !auth_required(admin) {
        return true;
    }

    match user.map(|user| user.id()) {
        Some(Ok(id)) => id == admin_identity(admin),
        _ => false,
    }
}
