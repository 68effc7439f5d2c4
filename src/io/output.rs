use crate::benchmark::PerformanceRating;
use crate::core::payback;
use crate::formatting::{
    format_count, format_currency, ColoredFormatter, FormattingConfig, OutputFormatter,
    PlainFormatter,
};
use crate::summary::{ExecutiveSummary, RecommendationTier};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_summary(&mut self, summary: &ExecutiveSummary) -> crate::Result<()>;
}

/// Writer for `format`, styled per `formatting` when it is a terminal.
pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Pretty-print any serializable value followed by a newline.
    pub fn write_value<T: Serialize + ?Sized>(&mut self, value: &T) -> crate::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_summary(&mut self, summary: &ExecutiveSummary) -> crate::Result<()> {
        self.write_value(summary)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, summary: &ExecutiveSummary) -> crate::Result<()> {
        let company = &summary.company_snapshot;
        writeln!(self.writer, "# Executive Summary: {}", company.name)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} | {} employees | {} annual revenue",
            company.industry,
            company.employees,
            format_currency(company.annual_revenue)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_findings(&mut self, summary: &ExecutiveSummary) -> crate::Result<()> {
        let findings = &summary.key_findings;
        let roi = &summary.roi_highlights;
        writeln!(self.writer, "## Key Findings")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("Bottlenecks", &findings.number_of_bottlenecks.to_string())?;
        self.write_row(
            "Annual hours lost",
            &format_count(findings.total_inefficiency_hours_annual),
        )?;
        self.write_row(
            "Annual cost of inefficiency",
            &format_currency(findings.total_inefficiency_cost_annual),
        )?;
        self.write_row("Investment required", &format_currency(roi.total_investment_required))?;
        self.write_row("Annual savings", &format_currency(roi.annual_savings_potential))?;
        self.write_row("Portfolio ROI", &format!("{:.1}%", roi.roi_percentage))?;
        self.write_row("Payback", &payback::describe(roi.payback_period_months))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, metric: &str, value: &str) -> crate::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }

    fn write_benchmark(&mut self, summary: &ExecutiveSummary) -> crate::Result<()> {
        let comparison = &summary.industry_comparison;
        writeln!(self.writer, "## Industry Comparison")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Revenue per employee: {} vs industry {} ({:+.1}%)",
            format_currency(comparison.revenue_per_employee.company),
            format_currency(comparison.revenue_per_employee.industry_average),
            comparison.revenue_per_employee.difference_percentage
        )?;
        writeln!(self.writer, "- Rating: **{}**", comparison.performance_rating)?;
        writeln!(self.writer, "- {}", comparison.improvement_message)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_opportunities(&mut self, summary: &ExecutiveSummary) -> crate::Result<()> {
        if summary.top_3_opportunities.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Top Opportunities")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Project | Annual Savings | ROI | Payback | Confidence |")?;
        writeln!(self.writer, "|---|---------|----------------|-----|---------|------------|")?;
        for (i, project) in summary.top_3_opportunities.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.1}% | {} | {:.0}% |",
                i + 1,
                project.description,
                format_currency(project.annual_savings),
                project.roi_percentage,
                payback::describe(project.payback_months),
                project.confidence * 100.0
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendation(&mut self, summary: &ExecutiveSummary) -> crate::Result<()> {
        writeln!(self.writer, "## Recommendation")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", summary.executive_recommendation.trim_end())?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_summary(&mut self, summary: &ExecutiveSummary) -> crate::Result<()> {
        self.write_header(summary)?;
        self.write_findings(summary)?;
        self.write_benchmark(summary)?;
        self.write_opportunities(summary)?;
        self.write_recommendation(summary)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: Box::new(ColoredFormatter::new(config)),
        }
    }

    pub fn plain(writer: W) -> Self {
        Self {
            writer,
            formatter: Box::new(PlainFormatter),
        }
    }

    fn section(&mut self, title: &str) -> crate::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.header(title))?;
        Ok(())
    }

    fn field(&mut self, label: &str, value: &str) -> crate::Result<()> {
        writeln!(self.writer, "  {:<26} {}", label, value)?;
        Ok(())
    }

    fn rating(&self, rating: PerformanceRating) -> String {
        match rating {
            PerformanceRating::AboveAverage => self.formatter.success(rating.label()),
            PerformanceRating::Average => self.formatter.bold(rating.label()),
            PerformanceRating::BelowAverage => self.formatter.warning(rating.label()),
        }
    }

    fn tier(&self, tier: RecommendationTier) -> String {
        match tier {
            RecommendationTier::StronglyRecommended => self.formatter.success(tier.label()),
            RecommendationTier::Recommended => self.formatter.bold(tier.label()),
            RecommendationTier::WorthConsidering => self.formatter.warning(tier.label()),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_summary(&mut self, summary: &ExecutiveSummary) -> crate::Result<()> {
        let company = &summary.company_snapshot;
        let title = format!("Executive Summary: {}", company.name);
        writeln!(self.writer, "{}", self.formatter.header(&title))?;
        writeln!(self.writer, "{}", "=".repeat(title.chars().count()))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter.dim(&format!(
                "{} | {} employees | {} annual revenue",
                company.industry,
                company.employees,
                format_currency(company.annual_revenue)
            ))
        )?;

        let findings = &summary.key_findings;
        self.section("Key Findings")?;
        self.field("Bottlenecks", &findings.number_of_bottlenecks.to_string())?;
        self.field(
            "Annual hours lost",
            &format_count(findings.total_inefficiency_hours_annual),
        )?;
        self.field(
            "Annual cost of inefficiency",
            &format_currency(findings.total_inefficiency_cost_annual),
        )?;
        self.field(
            "Automation opportunity",
            &format_currency(findings.automation_opportunity),
        )?;

        let roi = &summary.roi_highlights;
        self.section("ROI Highlights")?;
        self.field("Investment required", &format_currency(roi.total_investment_required))?;
        self.field("Annual savings", &format_currency(roi.annual_savings_potential))?;
        self.field("Portfolio ROI", &format!("{:.1}%", roi.roi_percentage))?;
        self.field("Payback", &payback::describe(roi.payback_period_months))?;

        let comparison = &summary.industry_comparison;
        self.section("Industry Comparison")?;
        let rating = self.rating(comparison.performance_rating);
        self.field("Rating", &rating)?;
        self.field(
            "Revenue per employee",
            &format!(
                "{} vs {} ({:+.1}%)",
                format_currency(comparison.revenue_per_employee.company),
                format_currency(comparison.revenue_per_employee.industry_average),
                comparison.revenue_per_employee.difference_percentage
            ),
        )?;
        writeln!(self.writer, "  {}", comparison.improvement_message)?;

        if !summary.top_3_opportunities.is_empty() {
            self.section("Top Opportunities")?;
            for (i, project) in summary.top_3_opportunities.iter().enumerate() {
                writeln!(
                    self.writer,
                    "  {}. {}: {}/yr, {:.1}% ROI, payback {}",
                    i + 1,
                    self.formatter.bold(&project.description),
                    format_currency(project.annual_savings),
                    project.roi_percentage,
                    payback::describe(project.payback_months)
                )?;
            }
        }

        self.section("Recommendation")?;
        let tier = self.tier(summary.recommendation_tier);
        writeln!(self.writer, "  [{tier}]")?;
        writeln!(self.writer, "  {}", summary.executive_recommendation.trim_end())?;
        self.writer.flush()?;
        Ok(())
    }
}
