//! Score command - score one piece of text

use ai_detect::classifier::{classify, Flag, Thresholds};
use ai_detect::detector::{breakdown, detect, FactorBreakdown, LexicalFeatures, ScoreResult};
use ai_detect::explain::{explain, Explanation};
use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::io::Read;

/// Everything `score` reports about one text
#[derive(Debug, Serialize)]
struct ScoreOutput {
    #[serde(flatten)]
    result: ScoreResult,
    flag: Flag,
    explanation: Explanation,
    #[serde(skip_serializing_if = "Option::is_none")]
    features: Option<LexicalFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    factors: Option<FactorBreakdown>,
}

impl ScoreOutput {
    fn new(text: &str, thresholds: &Thresholds, with_breakdown: bool) -> Self {
        let result = detect(text);
        let (features, factors) = match breakdown(text).filter(|_| with_breakdown) {
            Some((f, b)) => (Some(f), Some(b)),
            None => (None, None),
        };
        Self {
            result,
            flag: classify(result.score, thresholds),
            explanation: explain(text, result.score),
            features,
            factors,
        }
    }
}

/// Run the score command
pub(super) fn run(
    text: Option<String>,
    stdin: bool,
    json: bool,
    with_breakdown: bool,
    thresholds: &Thresholds,
) -> Result<()> {
    let text = if stdin {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read text from stdin")?;
        buf
    } else {
        text.unwrap_or_default()
    };

    let output = ScoreOutput::new(&text, thresholds, with_breakdown);
    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_text(&output));
    }
    Ok(())
}

fn render_text(output: &ScoreOutput) -> String {
    let flag = match output.flag {
        Flag::LikelyAi => style(output.flag.as_str()).red().bold(),
        Flag::Ambiguous => style(output.flag.as_str()).yellow().bold(),
        Flag::LikelyHuman => style(output.flag.as_str()).green().bold(),
    };
    let mut out = format!(
        "Score:       {:.4}\nFlag:        {}\nExplanation: {}\n",
        output.result.score, flag, output.explanation
    );

    if let Some(f) = &output.features {
        out.push_str(&format!(
            "\nFeatures\n  words            {}\n  avg word length  {:.3}\n  unique ratio     {:.3}\n  punct per word   {:.3}\n  em-dash per word {:.3}\n",
            f.word_count, f.avg_word_len, f.unique_ratio, f.punct_per_word, f.emdash_per_word
        ));
    }
    if let Some(b) = &output.factors {
        out.push_str(&format!(
            "\nFactors\n  low diversity    {:.3}\n  long words       {:.3}\n  low punctuation  {:.3}\n  em-dash          {:.3}\n",
            b.low_diversity, b.long_word, b.low_punctuation, b.em_dash
        ));
    }
    out.push_str(&format!("\n{}\n", style(output.result.note).dim()));
    out
}
