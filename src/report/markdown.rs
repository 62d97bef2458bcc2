//! Markdown rendering
//!
//! Pure functions of their input: the same value always renders to the same
//! bytes. Optional fields that are absent produce no output at all.

use chrono::SecondsFormat;

use crate::schema::{
    ArchitectureResult, ComprehensiveArchitectureReport, DeprecationRisk, FailureAnalysisResult,
    IntegrationReport, PerformanceAnalysis, Score, Severity, SystemComparison,
};

/// `floor(score * 100)`, always within [0, 100]
pub fn percent(score: Score) -> u8 {
    (score.get() * 100.0).floor() as u8
}

/// Make a value safe for a single table cell
pub fn escape_cell(value: &str) -> String {
    value
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .replace('|', "\\|")
}

pub fn render_basic(data: &ArchitectureResult) -> String {
    let mut md = String::new();

    md.push_str("### Core Components\n");
    md.push_str("| Component | Type | Criticality | Responsibility | Technologies |\n");
    md.push_str("|-----------|------|-------------|----------------|--------------|\n");
    for component in &data.core_components {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            escape_cell(&component.name),
            component.category,
            component.criticality,
            escape_cell(&component.responsibility),
            escape_cell(&component.technologies.join(", "))
        ));
    }

    md.push_str("\n### Data Flows\n");
    for flow in &data.data_flows {
        md.push_str(&format!(
            "- {} → {}: {} (via `{}`)",
            flow.source, flow.target, flow.data_type, flow.protocol
        ));
        if let Some(ref throughput) = flow.throughput {
            md.push_str(&format!(" | Throughput: {}", throughput));
        }
        md.push('\n');
    }

    let engine = &data.decision_engine;
    md.push_str("\n### Decision Engine\n");
    md.push_str(&format!(
        "- **Protocol**: {}\n",
        engine.negotiation_protocol
    ));
    md.push_str(&format!(
        "- **Optimization target**: {}\n",
        engine.optimization_metric
    ));
    if let Some(ref latency) = engine.decision_latency {
        md.push_str(&format!("- **Decision latency**: {}\n", latency));
    }

    md.push_str("\n### Key Innovations\n");
    for innovation in &data.key_innovations {
        md.push_str(&format!("- 🎯 {}\n", innovation));
    }

    md.push_str("\n### Expected Challenges\n");
    for challenge in &data.implementation_challenges {
        md.push_str(&format!("- ⚠️ {}\n", challenge));
    }

    md
}

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Catastrophic => "🔴",
        Severity::Critical => "🟠",
        Severity::Minor => "🟡",
    }
}

pub fn render_failure(data: &FailureAnalysisResult) -> String {
    let mut md = format!("### System: {}\n\n", data.system_name);

    md.push_str("#### Critical Vulnerabilities\n");
    for risk in &data.critical_vulnerabilities {
        md.push_str(&format!(
            "\n{} **{}**\n",
            severity_marker(risk.severity),
            risk.failure_point
        ));
        md.push_str(&format!("   - Probability: {}\n", risk.probability));
        md.push_str(&format!("   - Severity: {}\n", risk.severity));
        md.push_str(&format!("   - Mitigation: {}\n", risk.mitigation_strategy));
        if let Some(ref fallback) = risk.fallback_option {
            md.push_str(&format!("   - Fallback: {}\n", fallback));
        }
    }

    md.push_str("\n#### Single Points of Failure\n");
    for spof in &data.single_points_of_failure {
        md.push_str(&format!("- {}\n", spof));
    }

    md.push_str("\n#### Recovery Requirements\n");
    md.push_str(&format!(
        "- **Recovery time objective (RTO)**: {}\n",
        data.recovery_time_objective
    ));
    md.push_str("- **Redundancy requirements**:\n");
    for requirement in &data.redundancy_requirements {
        md.push_str(&format!("  - {}\n", requirement));
    }

    if let Some(ref plan) = data.disaster_recovery_plan {
        md.push_str(&format!("\n#### Disaster Recovery Plan\n{}\n", plan));
    }

    md
}

fn deprecation_marker(risk: DeprecationRisk) -> &'static str {
    match risk {
        DeprecationRisk::None => "🟢",
        DeprecationRisk::Low => "🟡",
        DeprecationRisk::Medium => "🟠",
        DeprecationRisk::High => "🔴",
    }
}

pub fn render_integration(data: &IntegrationReport) -> String {
    let mut md = format!("### System: {}\n\n", data.system_name);

    md.push_str("#### Technology Stack\n");
    for tech in &data.tech_stack_analysis {
        md.push_str(&format!(
            "\n{} **{}** (v{})\n",
            deprecation_marker(tech.deprecation_risk),
            tech.technology,
            tech.version_range
        ));
        if !tech.compatibility_issues.is_empty() {
            md.push_str(&format!(
                "   - Compatibility issues: {}\n",
                tech.compatibility_issues.join(", ")
            ));
        }
        if !tech.integration_points.is_empty() {
            md.push_str(&format!(
                "   - Integration points: {}\n",
                tech.integration_points.join(", ")
            ));
        }
    }

    md.push_str("\n#### Integration Patterns\n");
    for pattern in &data.integration_patterns_used {
        md.push_str(&format!("- {}\n", pattern));
    }

    md.push_str("\n#### Scores\n");
    md.push_str(&format!(
        "- **API compatibility**: {}%\n",
        percent(data.api_compatibility_score)
    ));

    if !data.deprecated_technologies.is_empty() {
        md.push_str("\n#### Deprecated Technologies\n");
        for deprecated in &data.deprecated_technologies {
            md.push_str(&format!("- ⚠️ {}\n", deprecated));
        }
    }

    if let Some(ref path) = data.migration_path {
        md.push_str(&format!("\n#### Migration Path\n{}\n", path));
    }

    if !data.security_compliance.is_empty() {
        md.push_str("\n#### Security Compliance\n");
        for compliance in &data.security_compliance {
            md.push_str(&format!("- ✅ {}\n", compliance));
        }
    }

    md
}

pub fn render_performance(data: &PerformanceAnalysis) -> String {
    let mut md = format!("### System: {}\n\n", data.system_name);

    md.push_str("#### Performance Profile\n");
    md.push_str(&format!(
        "- **Expected throughput**: {}\n",
        data.throughput_estimate
    ));
    md.push_str(&format!(
        "- **Latency profile**: {}\n",
        data.latency_profile
    ));
    if let Some(tps) = data.expected_tps {
        md.push_str(&format!("- **Transactions per second (TPS)**: {}\n", tps));
    }

    md.push_str("\n#### Scalability Metrics\n");
    for metric in &data.scalability_metrics {
        md.push_str(&format!("\n- **{}**\n", metric.metric_name));
        md.push_str(&format!(
            "  - Current capacity: {}\n",
            metric.current_capacity
        ));
        md.push_str(&format!(
            "  - Scalability factor: {}x\n",
            metric.scalability_factor.get()
        ));
        if let Some(ref bottleneck) = metric.bottleneck {
            md.push_str(&format!("  - Bottleneck: {}\n", bottleneck));
        }
    }

    md.push_str("\n#### Scaling Strategy\n");
    md.push_str(&format!(
        "- **Scaling**: {}\n",
        data.recommended_scaling_strategy
    ));
    md.push_str(&format!(
        "- **Load balancing**: {}\n",
        data.load_balancing_approach
    ));
    md.push_str(&format!("- **Caching**: {}\n", data.caching_strategy));

    md.push_str("\n#### Optimization Opportunities\n");
    for opportunity in &data.optimization_opportunities {
        md.push_str(&format!("- 🚀 {}\n", opportunity));
    }

    md
}

pub fn render_comparison(data: &SystemComparison) -> String {
    let mut md = format!(
        "#### Comparison: {} vs {}\n\n",
        data.system_a, data.system_b
    );

    md.push_str(&format!(
        "- **Performance differential**: {}\n",
        data.performance_differential
    ));
    md.push_str(&format!(
        "- **Complexity ratio**: {}x\n",
        data.complexity_ratio
    ));
    md.push_str(&format!(
        "- **Cost efficiency**: {}\n",
        data.cost_efficiency_comparison
    ));

    md.push_str("\n#### Decision Factors\n");
    for factor in &data.decision_factors {
        md.push_str(&format!("- {}\n", factor));
    }

    md.push_str("\n#### Trade-offs\n");
    for trade_off in &data.trade_offs {
        md.push_str(&format!("- {}\n", trade_off));
    }

    md.push_str(&format!(
        "\n#### Recommendation\n**{}**\n",
        data.recommendation
    ));

    md
}

pub fn render_report(report: &ComprehensiveArchitectureReport) -> String {
    let mut md = String::from("# 📊 Comprehensive Architecture Analysis\n\n");

    md.push_str(&format!(
        "**Generated**: {}\n",
        report
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    md.push_str(&format!(
        "**Confidence**: {}%\n\n",
        percent(report.confidence_level)
    ));
    if let Some(ref notes) = report.analyst_notes {
        md.push_str(&format!("**Analyst notes**: {}\n\n", notes));
    }
    md.push_str("---\n\n");

    md.push_str("## 1. Basic Analysis\n\n");
    md.push_str(&render_basic(&report.basic_analysis));

    md.push_str("\n---\n\n## 2. Failure Points and Risks\n\n");
    md.push_str(&render_failure(&report.failure_analysis));

    md.push_str("\n---\n\n## 3. Integration and Compatibility\n\n");
    md.push_str(&render_integration(&report.integration_analysis));

    md.push_str("\n---\n\n## 4. Performance and Scalability\n\n");
    md.push_str(&render_performance(&report.performance_analysis));

    if let Some(ref comparison) = report.comparative_analysis {
        md.push_str("\n---\n\n## 5. Comparative Analysis\n\n");
        md.push_str(&render_comparison(comparison));
    }

    let basic = &report.basic_analysis;
    md.push_str("\n---\n\n## 📝 Executive Summary\n\n");
    md.push_str("### Key Points\n");
    md.push_str(&format!(
        "- **System analyzed**: {}\n",
        basic.winning_system_name
    ));
    md.push_str(&format!(
        "- **Core components**: {}\n",
        basic.core_components.len()
    ));
    md.push_str(&format!("- **Data flows**: {}\n", basic.data_flows.len()));
    md.push_str(&format!(
        "- **Innovations identified**: {}\n",
        basic.key_innovations.len()
    ));
    md.push_str(&format!(
        "- **Known challenges**: {}\n",
        basic.implementation_challenges.len()
    ));
    md.push_str(&format!(
        "- **Critical vulnerabilities**: {}\n",
        report.failure_analysis.critical_vulnerabilities.len()
    ));
    md.push_str(&format!(
        "- **API compatibility**: {}%\n",
        percent(report.integration_analysis.api_compatibility_score)
    ));

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ReportParts, fixtures};
    use chrono::{TimeZone, Utc};

    fn report(comparison: bool, notes: Option<&str>) -> ComprehensiveArchitectureReport {
        let parts = ReportParts {
            comparison: comparison.then(fixtures::comparison),
            ..fixtures::parts()
        };
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let confidence = Score::try_from(0.94).unwrap();
        ComprehensiveArchitectureReport::assemble(parts, confidence, notes.map(String::from), at)
    }

    #[test]
    fn test_percent_floors() {
        let percent_of = |v: f64| percent(Score::try_from(v).unwrap());
        assert_eq!(percent_of(0.87), 87);
        assert_eq!(percent_of(0.999), 99);
        assert_eq!(percent_of(1.0), 100);
        assert_eq!(percent_of(0.0), 0);
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("line one\nline two"), "line one line two");
        assert_eq!(escape_cell("crlf\r\nend"), "crlf end");
    }

    #[test]
    fn test_basic_table_and_flows() {
        let md = render_basic(&fixtures::architecture());

        assert!(md.contains("| Gateway | Gateway | medium | Routes client traffic | Envoy, Lua |"));
        assert!(md.contains("- Gateway → Database: Orders (via `REST`)\n"));
        assert!(!md.contains("Throughput"));
        assert!(md.contains("- **Decision latency**: < 200ms"));
    }

    #[test]
    fn test_table_cells_escaped() {
        let mut data = fixtures::architecture();
        data.core_components[0].responsibility = "Routes | filters\ntraffic".to_string();

        let md = render_basic(&data);
        assert!(md.contains("| Routes \\| filters traffic |"));
    }

    #[test]
    fn test_failure_markers_and_optional_fields() {
        let mut data = fixtures::failure();
        let md = render_failure(&data);
        assert!(md.contains("🔴 **Single database primary**"));
        assert!(!md.contains("Fallback"));
        assert!(!md.contains("Disaster Recovery Plan"));

        data.critical_vulnerabilities[0].fallback_option = Some("Read-only mode".to_string());
        data.disaster_recovery_plan = Some("Restore from snapshots".to_string());
        let md = render_failure(&data);
        assert!(md.contains("   - Fallback: Read-only mode\n"));
        assert!(md.contains("#### Disaster Recovery Plan\nRestore from snapshots\n"));
    }

    #[test]
    fn test_integration_score_and_omitted_sections() {
        let md = render_integration(&fixtures::integration());

        assert!(md.contains("- **API compatibility**: 87%"));
        assert!(md.contains("🟡 **PostgreSQL** (v14-16)"));
        assert!(!md.contains("Compatibility issues"));
        assert!(!md.contains("Deprecated Technologies"));
        assert!(!md.contains("Migration Path"));
        assert!(md.contains("- ✅ TLS 1.3"));
    }

    #[test]
    fn test_performance_factor_and_bottleneck() {
        let md = render_performance(&fixtures::performance());

        assert!(md.contains("  - Scalability factor: 4x\n"));
        assert!(md.contains("  - Bottleneck: Database writes\n"));
        assert!(!md.contains("TPS"));
    }

    #[test]
    fn test_comparison_recommendation_last() {
        let md = render_comparison(&fixtures::comparison());

        assert!(md.starts_with("#### Comparison: System X vs System Y"));
        assert!(md.contains("- **Complexity ratio**: 1.25x"));
        assert!(md.ends_with("#### Recommendation\n**Adopt System X**\n"));
    }

    #[test]
    fn test_report_sections_in_order() {
        let md = render_report(&report(true, Some("Reviewed")));

        let positions: Vec<usize> = [
            "**Generated**: 2024-05-01T12:00:00Z",
            "**Confidence**: 94%",
            "**Analyst notes**: Reviewed",
            "## 1. Basic Analysis",
            "## 2. Failure Points and Risks",
            "## 3. Integration and Compatibility",
            "## 4. Performance and Scalability",
            "## 5. Comparative Analysis",
            "## 📝 Executive Summary",
        ]
        .iter()
        .map(|needle| md.find(needle).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_report_without_optionals() {
        let md = render_report(&report(false, None));

        assert!(!md.contains("Analyst notes"));
        assert!(!md.contains("Comparative Analysis"));
        assert!(md.contains("- **System analyzed**: System X\n"));
        assert!(md.contains("- **Core components**: 1\n"));
        assert!(md.contains("- **Critical vulnerabilities**: 1\n"));
        assert!(md.ends_with("- **API compatibility**: 87%\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let value = report(true, Some("Reviewed"));
        assert_eq!(render_report(&value), render_report(&value));
    }
}
