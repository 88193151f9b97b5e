pub const GREETING: &str = "hello world";

pub async fn greeting() -> &'static str {
    GREETING
}
