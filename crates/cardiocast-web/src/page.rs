//! HTML rendering for the prediction form page.
//!
//! One document serves every state: the empty form, a diagnosis, the
//! invalid-input notice. Only the result line under the submit button
//! changes between renders. Wording, layout, and styling are carried over
//! from the deployed app.

use cardiocast_core::{FEATURE_COUNT, PredictionLabel};
use chrono::{Datelike, Utc};

/// Result line rendered under the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// A diagnosis from the classifier.
    Label(PredictionLabel),
    /// The re-entry notice for a rejected submission.
    Notice(String),
    /// The classifier failed; shown instead of a diagnosis.
    Unavailable,
}

/// Form fields in submission order: input name, label text, placeholder.
const FIELDS: [(&str, &str, &str); FEATURE_COUNT] = [
    ("age", "\u{1f9d1} Age Value", "Enter Age in Years"),
    ("sex", "\u{26a5} Sex Value", "1 for Male, 0 for Female"),
    ("cp", "\u{2764}\u{fe0f} Chest pain type", "Enter Chest Pain Type"),
    ("trestbps", "\u{1fa7a} Resting BP", "Enter Resting BP in mmHg"),
    ("chol", "\u{1f354} Cholesterol", "Enter Cholesterol in mg/dL"),
    ("fbs", "\u{1fa78} Fasting Sugar", "1 if > 120 mg/dL, else 0"),
    ("restecg", "\u{1f4c9} Resting ECG", "Enter ECG Results"),
    ("thalach", "\u{1f493} Max Heart Rate", "Enter Maximum Heart Rate"),
    ("exang", "\u{1f3c3} Angina", "1 if Yes, 0 if No"),
    ("oldpeak", "\u{1f4ca} ST Depression", "Enter ST Depression"),
    ("slope", "\u{1f5fb} Slope", "Enter Slope of ST"),
    ("ca", "\u{1f52c} Major Vessels", "Enter Number of Major Vessels"),
    ("thal", "\u{1f9ec} Thalassemia", "Enter Thalassemia Status"),
];

const STYLE: &str = r#"
body {
    background-color: #0b132b;
    color: white;
    font-family: 'Roboto', sans-serif;
    margin: 0;
    padding: 0 0 40px 0;
}
.title {
    text-align: center;
    font-size: 50px;
    color: #e63946;
    font-weight: bold;
    margin-top: 20px;
    animation: fadeIn 2s ease-in-out;
}
.title .heart {
    display: inline-block;
    animation: pulse 1.5s infinite;
}
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes pulse {
    0% { transform: scale(1); }
    50% { transform: scale(1.1); }
    100% { transform: scale(1); }
}
.sub-title {
    text-align: center;
    font-size: 20px;
    color: #e63946;
    margin-bottom: 40px;
    animation: fadeIn 2.5s ease-in-out;
}
.input-container {
    background-color: rgba(255, 255, 255, 0.1);
    padding: 20px;
    border-radius: 10px;
    margin: 20px auto;
    width: 80%;
    max-width: 800px;
    box-shadow: 0px 4px 15px rgba(255, 255, 255, 0.1);
    animation: fadeIn 3s ease-in-out;
}
.grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 16px;
}
.field.wide {
    grid-column: 1 / -1;
}
.field label {
    display: block;
    font-size: 14px;
    margin-bottom: 6px;
}
.field input {
    width: 100%;
    box-sizing: border-box;
    padding: 8px;
    border: none;
    border-radius: 5px;
    font-size: 14px;
}
.divider {
    height: 2px;
    margin: 20px 0;
    background-color: #ffffff;
}
button {
    background-color: #f39c12;
    color: #ffffff;
    border: none;
    padding: 10px 20px;
    border-radius: 25px;
    font-size: 16px;
    cursor: pointer;
    transition: all 0.3s ease;
    box-shadow: 0px 4px 6px rgba(0, 0, 0, 0.2);
}
button:hover {
    background-color: black;
    transform: translateY(-2px);
}
.result {
    text-align: center;
    font-size: 24px;
    font-weight: bold;
    margin-top: 20px;
    animation: fadeIn 1.5s ease-in-out;
}
.result-disease {
    color: red;
}
.result-no-disease {
    color: green;
}
.result-notice {
    color: #f39c12;
}
.footer {
    text-align: center;
    font-size: 14px;
    color: #e63946;
    margin-top: 40px;
    text-shadow: 1px 1px 2px rgba(0, 0, 0, 0.7);
}
"#;

/// Render the full page, with the result line for `banner` when present.
pub fn render(banner: Option<&Banner>) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Heart Disease Prediction App</title>\n");
    html.push_str("<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(concat!(
        "<div class=\"title\">Heart Disease Prediction App ",
        "<span class=\"heart\">\u{2764}\u{fe0f}</span></div>\n"
    ));
    html.push_str(concat!(
        "<div class=\"sub-title\">",
        "Provide accurate details below to check for heart disease risk.",
        "</div>\n"
    ));

    html.push_str("<form class=\"input-container\" method=\"post\" action=\"/predict\">\n");
    html.push_str("<div class=\"grid\">\n");
    for (i, (name, label, placeholder)) in FIELDS.iter().enumerate() {
        // The last field gets a full-width row of its own.
        let class = if i == FIELDS.len() - 1 {
            "field wide"
        } else {
            "field"
        };
        html.push_str(&format!(
            r#"<div class="{class}"><label for="{name}">{label}</label><input type="text" id="{name}" name="{name}" placeholder="{placeholder}"></div>"#
        ));
        html.push('\n');
    }
    html.push_str("</div>\n");
    html.push_str("<div class=\"divider\"></div>\n");
    html.push_str("<button type=\"submit\">\u{1f50d} Heart Disease Test Result</button>\n");
    if let Some(banner) = banner {
        html.push_str(&result_line(banner));
        html.push('\n');
    }
    html.push_str("</form>\n");

    html.push_str(&format!(
        "<div class=\"footer\">Heart Disease Prediction App \u{a9} {}</div>\n",
        Utc::now().year()
    ));
    html.push_str("</body>\n</html>\n");
    html
}

fn result_line(banner: &Banner) -> String {
    match banner {
        Banner::Label(PredictionLabel::HasDisease) => format!(
            r#"<div class="result result-disease">{}</div>"#,
            PredictionLabel::HasDisease.message()
        ),
        Banner::Label(PredictionLabel::NoDisease) => format!(
            r#"<div class="result result-no-disease">{}</div>"#,
            PredictionLabel::NoDisease.message()
        ),
        Banner::Notice(message) => {
            format!(r#"<div class="result result-notice">{message}</div>"#)
        }
        Banner::Unavailable => concat!(
            r#"<div class="result result-notice">"#,
            "Prediction is temporarily unavailable. Please try again.",
            "</div>"
        )
        .to_string(),
    }
}
