pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "SHOP_SERVICE_ALLOWED_ORIGINS";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
