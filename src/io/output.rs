use crate::core::ScenarioOutputs;
use crate::formatting::{
    format_amount, format_discount_rate, format_millions, format_months, format_multiplier,
    format_percent, formatter_for, FormattingConfig, OutputFormatter,
};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_outputs(&mut self, outputs: &ScenarioOutputs) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_outputs(&mut self, outputs: &ScenarioOutputs) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(outputs)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_outputs(&mut self, outputs: &ScenarioOutputs) -> anyhow::Result<()> {
        self.write_header(outputs)?;
        self.write_metrics(outputs)?;
        self.write_investment(outputs)?;
        self.write_revenue(outputs)?;
        self.write_cost_savings(outputs)?;
        self.write_timeline(outputs)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, outputs: &ScenarioOutputs) -> anyhow::Result<()> {
        let p = &outputs.parameters;
        writeln!(self.writer, "# Investment Scenario")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Investment {} | Revenue {} | Cost savings {} | Discount rate {}",
            format_multiplier(p.investment_multiplier),
            format_multiplier(p.revenue_multiplier),
            format_multiplier(p.cost_savings_multiplier),
            format_discount_rate(p.discount_rate_percent),
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, outputs: &ScenarioOutputs) -> anyhow::Result<()> {
        let m = &outputs.metrics;
        let h = &outputs.headline;
        writeln!(self.writer, "## Key Metrics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| ROI | {} |", format_percent(m.roi_percent))?;
        writeln!(self.writer, "| NPV | {} |", format_millions(m.npv_m))?;
        writeln!(self.writer, "| Payback | {} |", format_months(m.payback_months))?;
        writeln!(
            self.writer,
            "| Total investment | {} |",
            format_millions(Some(h.total_investment_m))
        )?;
        writeln!(
            self.writer,
            "| Revenue benefit | {} |",
            format_millions(Some(h.revenue_benefit_m))
        )?;
        writeln!(
            self.writer,
            "| Annual cost savings | {} |",
            format_millions(Some(h.annual_cost_savings_m))
        )?;
        if let Some(bands) = outputs.bands {
            writeln!(
                self.writer,
                "| ROI range | {} / {} / {} |",
                format_percent(Some(bands.conservative_roi_percent)),
                format_percent(Some(bands.most_likely_roi_percent)),
                format_percent(Some(bands.optimistic_roi_percent)),
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_investment(&mut self, outputs: &ScenarioOutputs) -> anyhow::Result<()> {
        writeln!(self.writer, "## Investment Phases")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Phase | Investment | Timeline | Focus |")?;
        writeln!(self.writer, "|-------|------------|----------|-------|")?;
        for phase in &outputs.investment {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                phase.phase,
                format_amount(phase.investment_m),
                phase.timeline,
                phase.focus
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_revenue(&mut self, outputs: &ScenarioOutputs) -> anyhow::Result<()> {
        writeln!(self.writer, "## Revenue Projection")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Year | Digital | Traditional | Total |")?;
        writeln!(self.writer, "|------|---------|-------------|-------|")?;
        for year in &outputs.revenue {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                year.year,
                format_amount(year.digital_m),
                format_amount(year.traditional_m),
                format_amount(year.total_m)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cost_savings(&mut self, outputs: &ScenarioOutputs) -> anyhow::Result<()> {
        writeln!(self.writer, "## Cost Savings")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Category | Annual | Year 1 | Year 2 | Year 3 |")?;
        writeln!(self.writer, "|----------|--------|--------|--------|--------|")?;
        for category in &outputs.cost_savings {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                category.category,
                format_amount(category.savings_m),
                format_amount(category.year1_m),
                format_amount(category.year2_m),
                format_amount(category.year3_m)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_timeline(&mut self, outputs: &ScenarioOutputs) -> anyhow::Result<()> {
        if outputs.roi_timeline.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## ROI Timeline")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Year | Annual ROI | Cumulative ROI |")?;
        writeln!(self.writer, "|------|------------|----------------|")?;
        for point in &outputs.roi_timeline {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                point.year,
                format_percent(Some(point.roi)),
                format_percent(Some(point.cumulative))
            )?;
        }
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
            formatter: formatter_for(config),
        }
    }

    fn signed(&self, value: Option<i64>, text: String) -> String {
        match value {
            Some(v) if v < 0 => self.formatter.negative(&text),
            Some(_) => self.formatter.positive(&text),
            None => self.formatter.dim(&text),
        }
    }

    fn row(&mut self, label: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "  {:<22} {}", label, value)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_outputs(&mut self, outputs: &ScenarioOutputs) -> anyhow::Result<()> {
        let p = outputs.parameters;
        let m = outputs.metrics;
        let h = outputs.headline;

        let title = self.formatter.header("INVESTMENT SCENARIO");
        writeln!(self.writer, "{}", title)?;
        let levers = self.formatter.dim(&format!(
            "investment {}  revenue {}  cost savings {}  discount {}",
            format_multiplier(p.investment_multiplier),
            format_multiplier(p.revenue_multiplier),
            format_multiplier(p.cost_savings_multiplier),
            format_discount_rate(p.discount_rate_percent),
        ));
        writeln!(self.writer, "{}", levers)?;
        writeln!(self.writer)?;

        let roi = self.signed(m.roi_percent, format_percent(m.roi_percent));
        let npv = self.signed(m.npv_m, format_millions(m.npv_m));
        let payback = match m.payback_months {
            Some(_) => self.formatter.bold(&format_months(m.payback_months)),
            None => self.formatter.dim(&format_months(None)),
        };
        self.row("ROI", &roi)?;
        self.row("NPV", &npv)?;
        self.row("Payback", &payback)?;
        self.row("Total investment", &format_millions(Some(h.total_investment_m)))?;
        self.row("Revenue benefit", &format_millions(Some(h.revenue_benefit_m)))?;
        self.row(
            "Annual cost savings",
            &format_millions(Some(h.annual_cost_savings_m)),
        )?;

        if let Some(bands) = outputs.bands {
            let range = format!(
                "{} / {} / {}",
                format_percent(Some(bands.conservative_roi_percent)),
                format_percent(Some(bands.most_likely_roi_percent)),
                format_percent(Some(bands.optimistic_roi_percent)),
            );
            self.row("ROI range", &range)?;
        }

        if !outputs.roi_timeline.is_empty() {
            writeln!(self.writer)?;
            let header = self.formatter.header("ROI TIMELINE");
            writeln!(self.writer, "{}", header)?;
            for point in &outputs.roi_timeline {
                writeln!(
                    self.writer,
                    "  {:<8} {:>10} {:>12}",
                    point.year,
                    format_percent(Some(point.roi)),
                    format_percent(Some(point.cumulative))
                )?;
            }
        }
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, config: FormattingConfig) -> Box<dyn OutputWriter> {
    let stdout = std::io::stdout();
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(stdout)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(stdout)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(stdout, config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::BaseTotals;
    use crate::core::ScenarioParameters;
    use crate::engine::{Assumptions, ScenarioModel};

    fn default_outputs() -> ScenarioOutputs {
        ScenarioModel::default().evaluate(&ScenarioParameters::default())
    }

    fn render(mut writer: impl OutputWriter, outputs: &ScenarioOutputs) {
        writer.write_outputs(outputs).unwrap();
    }

    #[test]
    fn json_writer_emits_full_bundle() {
        let outputs = default_outputs();
        let mut buf = Vec::new();
        render(JsonWriter::new(&mut buf), &outputs);
        let text = String::from_utf8(buf).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["metrics"]["roi_percent"], 6079);
        assert_eq!(value["headline"]["revenue_benefit_m"], 2248);
        assert_eq!(value["investment"].as_array().unwrap().len(), 3);
        assert_eq!(value["roi_timeline"][2]["cumulative"], 6079);
    }

    #[test]
    fn markdown_writer_renders_tables() {
        let outputs = default_outputs();
        let mut buf = Vec::new();
        render(MarkdownWriter::new(&mut buf), &outputs);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("# Investment Scenario"));
        assert!(text.contains("| ROI | 6,079% |"));
        assert!(text.contains("| Payback | 0.6 months |"));
        assert!(text.contains("| Phase 2 | $18.0M | Months 7-12 | Customer Experience |"));
        assert!(text.contains("| Year 3 | 1,337% | 6,079% |"));
    }

    #[test]
    fn terminal_writer_plain_output() {
        let outputs = default_outputs();
        let mut buf = Vec::new();
        render(TerminalWriter::new(&mut buf, FormattingConfig::plain()), &outputs);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("INVESTMENT SCENARIO"));
        assert!(text.contains("6,079%"));
        assert!(text.contains("$1,908M"));
        assert!(text.contains("4,559% / 6,079% / 7,599%"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn undefined_metrics_render_as_not_available() {
        let model = ScenarioModel {
            assumptions: Assumptions {
                totals: BaseTotals {
                    investment_m: 0.0,
                    ..BaseTotals::default()
                },
                ..Assumptions::default()
            },
            ..ScenarioModel::default()
        };
        let outputs = model.evaluate(&ScenarioParameters::default());
        let mut buf = Vec::new();
        render(TerminalWriter::new(&mut buf, FormattingConfig::plain()), &outputs);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("N/A"));
        assert!(!text.contains("ROI TIMELINE"));
    }
}
