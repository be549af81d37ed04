use serde::Serialize;

#[derive(Serialize)]
pub struct LoginForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct ServiceTicketForm<'a> {
    pub service: &'a str,
}
