use anyhow::Context;
use tracing::info;
use vidgrade_core::{extract_video_id, Analysis, AnalysisRequest, AnalyzerConfig, VideoAnalyzer};

use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::exit_codes;

pub async fn run(args: AnalyzeArgs) -> anyhow::Result<i32> {
    let Some(video_id) = extract_video_id(&args.url).map(str::to_string) else {
        eprintln!("error: not a recognized video URL: {}", args.url);
        return Ok(exit_codes::INVALID_VIDEO_REFERENCE);
    };

    let analyzer = VideoAnalyzer::from_config(&AnalyzerConfig::from_env())
        .context("failed to initialize analyzer")?;

    info!(video_id = %video_id, subject = %args.subject, "analyzing video");
    let request = AnalysisRequest::new(args.url, args.subject);
    let analysis = analyzer.analyze_tagged(&request).await;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Text => print!("{}", render_text(&video_id, &request.subject, &analysis)),
    }

    Ok(exit_codes::SUCCESS)
}

fn render_text(video_id: &str, subject: &str, analysis: &Analysis) -> String {
    let record = &analysis.record;
    let width = record
        .rubric
        .iter()
        .map(|e| e.criterion.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("Video:    {}\n", video_id));
    out.push_str(&format!("Subject:  {}\n", subject));
    match &analysis.provider {
        Some(provider) => out.push_str(&format!("Source:   live ({})\n", provider)),
        None => out.push_str("Source:   fallback\n"),
    }
    out.push('\n');
    for entry in &record.rubric {
        out.push_str(&format!(
            "  {:<width$}  {}/{}\n",
            entry.criterion,
            entry.score,
            entry.max_score,
            width = width
        ));
    }
    out.push('\n');
    out.push_str(&format!("Overall:  {}\n", record.overall_grade));
    out.push_str(&format!("Feedback: {}\n", record.feedback));
    out
}
