//! Server-rendered HTML for the estimator page.

use crate::validation::{Bounds, PredictForm, BATH, BHK, SQFT};
use house_price_core::text::location_equals;
use house_price_core::Estimate;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const TITLE: &str = "Bangalore House Price Predictor";
pub const LOAD_FAILED: &str = "Failed to load model. Please check if the artifacts exist.";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem; }
.columns { display: flex; gap: 2rem; }
.col-main { flex: 2; }
.col-side { flex: 1; }
aside { background: #f4f4f8; padding: 1rem; margin-bottom: 1rem; }
label { display: block; margin-top: .8rem; }
button { margin-top: 1rem; width: 100%; padding: .6rem; }
.error { background: #fde8e8; padding: .6rem; margin: .5rem 0; }
.warning { background: #fff7e0; padding: .6rem; margin: .5rem 0; }
.success { background: #e6f6ea; padding: .6rem; margin: .5rem 0; }
.info { background: #e8f0fd; padding: .6rem; margin: .5rem 0; }
footer { text-align: center; margin-top: 2rem; font-size: 12px; color: #666; }
"#;

/// What to show in the result area below the form.
#[derive(Debug, Clone)]
pub enum Outcome {
    Estimate(Estimate),
    Error(String),
}

/// Everything one render of the page needs.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub locations: Vec<&'a str>,
    pub form: PredictForm,
    pub warnings: Vec<&'static str>,
    pub outcome: Option<Outcome>,
    /// Set when the artifacts failed to load; the form is not rendered.
    pub load_error: Option<&'a str>,
}

impl PageView<'_> {
    /// Form pre-filled with the widget defaults and the first location.
    pub fn with_defaults(mut self) -> Self {
        self.form = PredictForm {
            location: self.locations.first().map(|s| s.to_string()).unwrap_or_default(),
            total_sqft: fmt_number(SQFT.default),
            bhk: fmt_number(BHK.default),
            bath: fmt_number(BATH.default),
        };
        self
    }
}

pub fn render(view: &PageView<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (TITLE) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                (header())
                @if let Some(err) = view.load_error {
                    div.error { (LOAD_FAILED) }
                    div.error { "Error loading model artifacts: " (err) }
                } @else {
                    (sidebar())
                    main.columns {
                        section class="col-main" {
                            (form(view))
                            (outcome(view))
                        }
                        (summary(&view.form))
                    }
                }
                (footer())
            }
        }
    }
}

fn header() -> Markup {
    html! {
        header {
            h1 { (TITLE) }
            hr;
            h3 { "Predict house prices in Bangalore based on location, size, and amenities" }
        }
    }
}

fn sidebar() -> Markup {
    html! {
        aside {
            h2 { "About This App" }
            p {
                "This model predicts house prices in Bangalore using a "
                strong { "Linear Regression" }
                " fitted on a cleaned set of property records."
            }
            h2 { "Model Info" }
            ul {
                li { strong { "Algorithm" } ": Linear Regression" }
                li { strong { "Features" } ": Location, Area, BHK, Bathrooms" }
                li { strong { "Dataset" } ": Bangalore Housing Data" }
                li { strong { "Preprocessing" } ": Outlier removal, feature engineering" }
            }
        }
    }
}

fn form(view: &PageView<'_>) -> Markup {
    html! {
        h2 { "Enter Property Details" }
        form method="post" action="/predict" {
            label for="location" { "Select Location" }
            select id="location" name="location" {
                @for loc in &view.locations {
                    option value=(loc) selected[location_equals(loc, &view.form.location)] { (loc) }
                }
            }
            (number_input("total_sqft", &SQFT, &view.form.total_sqft))
            (number_input("bhk", &BHK, &view.form.bhk))
            (number_input("bath", &BATH, &view.form.bath))
            @for w in &view.warnings {
                div.warning { (w) }
            }
            button type="submit" { "Predict Price" }
        }
    }
}

fn number_input(name: &str, b: &Bounds, value: &str) -> Markup {
    html! {
        label for=(name) { (b.label) }
        input type="number" id=(name) name=(name)
            min=(fmt_number(b.min)) max=(fmt_number(b.max)) step=(fmt_number(b.step))
            value=(value) required;
    }
}

fn outcome(view: &PageView<'_>) -> Markup {
    html! {
        @match &view.outcome {
            None => {}
            Some(Outcome::Error(msg)) => {
                div.error { (msg) }
            }
            Some(Outcome::Estimate(estimate)) => {
                div.success {
                    h3 { "Estimated Price: ₹" (format!("{:.2}", estimate.price_lakhs)) " Lakhs" }
                }
                div.info {
                    strong { "Price per sq ft:" }
                    " ₹" (format!("{:.0}", estimate.price_per_sqft))
                }
                div.info {
                    strong { "Expected Range:" }
                    " ₹" (format!("{:.2}", estimate.lower_lakhs))
                    " - ₹" (format!("{:.2}", estimate.upper_lakhs)) " Lakhs"
                }
            }
        }
    }
}

fn summary(form: &PredictForm) -> Markup {
    let location = form.location.trim();
    let area = form.total_sqft.trim().parse::<f64>().ok();
    let bhk = form.bhk.trim();
    let bath = form.bath.trim();
    html! {
        section class="col-side" {
            h2 { "Property Summary" }
            dl {
                @if !location.is_empty() {
                    dt { "Location" }
                    dd { (location) }
                }
                @if let Some(sqft) = area {
                    dt { "Area" }
                    dd { (group_thousands(sqft)) " sq ft" }
                }
                @if !bhk.is_empty() {
                    dt { "Bedrooms" }
                    dd { (bhk) " BHK" }
                }
                @if !bath.is_empty() {
                    dt { "Bathrooms" }
                    dd { (bath) }
                }
            }
            h2 { "Tips" }
            ul {
                li { strong { "Location" } " greatly affects price" }
                li { strong { "Central areas" } " are typically more expensive" }
                li { strong { "Price per sq ft" } " varies by locality" }
                li { "Consider " strong { "future development" } " in the area" }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer {
            hr;
            p { "Machine Learning Project | Bangalore House Price Prediction" }
        }
    }
}

/// Integers print without a fractional part.
pub fn fmt_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        v.to_string()
    }
}

/// `12345.0` -> `12,345`; fractional part is rounded away.
pub fn group_thousands(v: f64) -> String {
    let n = v.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
