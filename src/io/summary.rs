use crate::schema::v1::AnalysisResult;

pub fn format_summary(result: &AnalysisResult) -> String {
    let version = env!("CARGO_PKG_VERSION");

    let mut out = String::new();
    out.push_str(&format!("ultraviab-score v{}\n", version));
    out.push_str(&format!(
        "Viability: {}/100 ({})\n",
        result.viability_score,
        result.classification.as_str()
    ));
    out.push_str(&format!("Confidence: {:.2}\n", result.confidence));

    if result.risk_factors.is_empty() {
        out.push_str("Risk factors: none\n");
    } else {
        out.push_str("Risk factors:\n");
        for factor in &result.risk_factors {
            out.push_str(&format!("- {}\n", display_risk_factor(factor)));
        }
    }

    out
}

/// Converts a snake_case risk factor code to readable text: splits on
/// underscores and upper-cases the first character of each piece.
pub fn display_risk_factor(raw: &str) -> String {
    raw.split('_')
        .map(|piece| {
            let mut chars = piece.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
