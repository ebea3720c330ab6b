use askama::Template;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub error: Option<String>,
}

impl LoginTemplate {
    pub fn blank() -> Self {
        Self { email: String::new(), error: None }
    }
}
