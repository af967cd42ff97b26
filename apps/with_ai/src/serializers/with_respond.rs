use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct WithRespondIn {
    pub text: String,
    pub state: String, // any string; not checked against the labels
}

#[derive(Debug, Serialize)]
pub struct WithRespondOut { pub reply: String }
