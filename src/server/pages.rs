//! HTML rendering for the screening form and its result block.
//!
//! Presentation only; the pipeline never depends on anything in this module.
//! The page is assembled by plain string substitution from the feature
//! schema, so the form always matches the fields the handler requires.

use crate::handler::{Outcome, Prediction};
use crate::schema;

const STYLE: &str = r#"
        body {
            font-family: Arial, sans-serif;
            margin: 40px;
            text-align: center;
        }
        form {
            display: grid;
            gap: 15px;
            max-width: 400px;
            margin: auto;
        }
        input[type="number"], input[type="text"] {
            padding: 10px;
            font-size: 16px;
            border: 1px solid #ccc;
            border-radius: 5px;
        }
        button {
            padding: 10px;
            font-size: 16px;
            background-color: #007BFF;
            color: white;
            border: none;
            border-radius: 5px;
            cursor: pointer;
        }
        button:hover {
            background-color: #0056b3;
        }
        .result {
            margin-top: 30px;
            padding: 20px;
            border-radius: 10px;
            display: inline-block;
            font-size: 20px;
            font-weight: bold;
        }
        .positive {
            color: white;
            background-color: #28a745;
            animation: pop 0.5s ease-in-out;
        }
        .negative {
            color: white;
            background-color: #007bff;
            animation: pop 0.5s ease-in-out;
        }
        @keyframes pop {
            0% { transform: scale(0.9); }
            50% { transform: scale(1.05); }
            100% { transform: scale(1); }
        }
        .emoji {
            font-size: 50px;
            margin: 10px 0;
        }
"#;

fn form_fields() -> String {
    let mut fields = String::new();
    for &name in &schema::FEATURE_NAMES {
        let label = schema::display_label(name);
        fields.push_str(&format!(
            r#"        <label for="{name}">{label}:</label>
        <input type="number" step="any" id="{name}" name="{name}" required>
"#
        ));
    }
    fields
}

fn result_block(outcome: Outcome) -> String {
    let (class, emoji) = match outcome {
        Outcome::Positive => ("positive", "\u{1F389}"),
        Outcome::Negative => ("negative", "\u{1F60A}"),
    };
    let text = outcome.as_str();
    format!(
        r#"    <div class="result {class}">
        <div class="emoji">{emoji}</div>
        {text}
    </div>
"#
    )
}

fn page(result: Option<String>) -> String {
    let fields = form_fields();
    let result = result.unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>VDRL_RESULT Prediction</title>
    <style>{STYLE}    </style>
</head>
<body>
    <h1>Predict VDRL Result</h1>
    <form action="/predict" method="post">
{fields}        <button type="submit">Predict</button>
    </form>
{result}</body>
</html>
"#
    )
}

/// The bare entry form.
pub fn form_page() -> String {
    page(None)
}

/// The form plus the styled outcome block.
pub fn outcome_page(outcome: Outcome) -> String {
    page(Some(result_block(outcome)))
}

/// The outcome page plus the raw prediction label, as the `/predict`
/// endpoint renders it.
pub fn prediction_page(prediction: Prediction) -> String {
    let mut block = result_block(prediction.outcome);
    block.push_str(&format!("    <h2>Prediction: {}</h2>\n", prediction.label));
    page(Some(block))
}
