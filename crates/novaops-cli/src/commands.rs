//! Command handlers for CLI subcommands.

use novaops_analysis::{RootCauseAnalysis, SearchReport};
use novaops_models::Incident;
use novaops_tools::{
    check_health, create_incident, get_dashboard_data, get_metrics, voice_alert, Commander,
    DashboardSnapshot, HealthReport, ServiceStatus, DEFAULT_SERVICES,
};
use tracing::info;

use crate::cli::{version_string, Commands};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a one-shot CLI command against `commander`.
pub fn execute(command: Commands, commander: &Commander) -> Result<()> {
    match command {
        // REPL is handled separately in main
        Commands::Run => Ok(()),
        Commands::Health => cmd_health(),
        Commands::Metrics { service, metric } => cmd_metrics(&service, &metric),
        Commands::Incident {
            title,
            severity,
            description,
        } => cmd_incident(commander, &title, &severity, description.as_deref()),
        Commands::Analyze { query } => cmd_analyze(commander, &query.join(" ")),
        Commands::RootCause { id } => cmd_root_cause(&id),
        Commands::Embed { text } => cmd_embed(commander, &text.join(" ")),
        Commands::Dashboard => cmd_dashboard(commander),
        Commands::Voice { message, severity } => cmd_voice(&message, &severity),
        Commands::Tools => cmd_tools(commander),
        Commands::Version => {
            println!("NovaOps v{}", version_string());
            Ok(())
        }
    }
}

/// Marker shown next to a service status.
pub fn status_marker(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Healthy => "[ok]",
        ServiceStatus::Degraded => "[!!]",
        ServiceStatus::Unhealthy => "[xx]",
    }
}

pub fn format_health(report: &HealthReport) -> String {
    format!(
        "  {} {:12} {:10} (uptime: {}h)",
        status_marker(report.status),
        report.service,
        report.status.as_str(),
        report.uptime_hours
    )
}

pub fn format_incident(incident: &Incident) -> String {
    format!(
        "[{}] {} ({}) - {}",
        incident.id, incident.title, incident.severity, incident.status
    )
}

pub fn format_search(report: &SearchReport) -> String {
    let mut out = format!("  Found {} similar incidents:\n", report.result_count);
    for hit in &report.results {
        out.push_str(&format!(
            "\n  [{}] {}\n    Severity: {} | Service: {} | Score: {}\n",
            hit.incident_id, hit.title, hit.severity, hit.service, hit.similarity_score
        ));
    }
    out
}

pub fn format_root_cause(analysis: &RootCauseAnalysis) -> String {
    let mut out = format!(
        "  [{}] {}\n  Service:    {}\n  Severity:   {}\n  Root cause: {}\n  Confidence: {:.0}%\n",
        analysis.incident_id,
        analysis.title,
        analysis.service,
        analysis.severity,
        analysis.root_cause,
        analysis.confidence * 100.0
    );
    out.push_str("\n  Contributing factors:\n");
    for factor in &analysis.contributing_factors {
        out.push_str(&format!("    - {}\n", factor));
    }
    out.push_str("\n  Recommendations:\n");
    for rec in &analysis.recommendations {
        out.push_str(&format!("    - {}\n", rec));
    }
    out
}

pub fn format_dashboard(data: &DashboardSnapshot) -> String {
    let mut out = String::from("  Services:\n");
    for svc in &data.services {
        out.push_str(&format!(
            "    {} {:12} {:10} (uptime: {})\n",
            status_marker(svc.status),
            svc.name,
            svc.status.as_str(),
            svc.uptime
        ));
    }

    out.push_str(&format!("\n  Active Incidents: {}\n", data.incident_count));
    for incident in &data.active_incidents {
        out.push_str(&format!("    {}\n", format_incident(incident)));
    }

    out.push_str("\n  Agents:\n");
    for agent in &data.agents {
        out.push_str(&format!(
            "    {:12} {} ({})\n",
            agent.name, agent.status, agent.last_action
        ));
    }

    out.push_str(&format!("\n  System Health: {}\n", data.system_health.as_str()));
    out
}

pub fn format_tools(commander: &Commander) -> String {
    let mut out = String::new();
    for agent in commander.agents() {
        out.push_str(&format!("  {} ({}):\n", agent.name, agent.model_id));
        for tool in &agent.tools {
            out.push_str(&format!("    {:24} {}\n", tool.name, tool.description));
        }
    }
    out
}

pub(crate) fn cmd_health() -> Result<()> {
    println!("Running infrastructure health check...\n");
    let mut rng = rand::thread_rng();
    for service in DEFAULT_SERVICES {
        println!("{}", format_health(&check_health(&mut rng, service)));
    }
    println!("\nDone.");
    Ok(())
}

fn cmd_metrics(service: &str, metric: &str) -> Result<()> {
    let report = get_metrics(&mut rand::thread_rng(), service, metric);
    println!(
        "  {} {}: {} {} (trend: {})",
        report.service,
        report.metric_type,
        report.value,
        report.unit,
        report.trend.as_str()
    );
    Ok(())
}

fn cmd_incident(commander: &Commander, title: &str, severity: &str, description: Option<&str>) -> Result<()> {
    let description = description
        .map(String::from)
        .unwrap_or_else(|| format!("Incident created via CLI: {}", title));

    println!("Creating incident: '{}' (severity: {})\n", title, severity);
    let incident = create_incident(commander.store(), title, severity, &description);
    info!(incident_id = %incident.id, "Created incident from CLI");

    println!("  ID:       {}", incident.id);
    println!("  Title:    {}", incident.title);
    println!("  Severity: {}", incident.severity);
    println!("  Status:   {}", incident.status);
    println!("  Created:  {}", incident.created_at.to_rfc3339());
    println!("\nDone.");
    Ok(())
}

pub(crate) fn cmd_analyze(commander: &Commander, query: &str) -> Result<()> {
    println!("Searching incidents for: '{}'\n", query);
    let report = commander.search().search(query);
    print!("{}", format_search(&report));
    println!("\nDone.");
    Ok(())
}

pub(crate) fn cmd_root_cause(id: &str) -> Result<()> {
    let analysis = novaops_analysis::root_cause_analysis(id)?;
    print!("{}", format_root_cause(&analysis));
    Ok(())
}

fn cmd_embed(commander: &Commander, text: &str) -> Result<()> {
    let embedding = commander.embedder().embed(text);
    let preview: Vec<String> = embedding.vector.iter().take(8).map(|v| v.to_string()).collect();

    println!("  Model:     {}", embedding.model);
    println!("  Dimension: {}", embedding.dimension);
    println!("  Text:      {}", embedding.text);
    println!("  Vector:    [{}, ...]", preview.join(", "));
    Ok(())
}

pub(crate) fn cmd_dashboard(commander: &Commander) -> Result<()> {
    println!("NovaOps Dashboard\n");
    let data = get_dashboard_data(commander.store(), &mut rand::thread_rng());
    print!("{}", format_dashboard(&data));
    println!("\nDone.");
    Ok(())
}

fn cmd_voice(message: &str, severity: &str) -> Result<()> {
    println!("Broadcasting voice alert (severity: {})\n", severity);
    let alert = voice_alert(&mut rand::thread_rng(), message, severity);

    println!("  Message:    {}", alert.message);
    println!("  Severity:   {}", alert.severity.as_str());
    println!("  Channels:   {}", alert.channels.join(", "));
    println!("  Status:     {}", alert.broadcast_status);
    println!("  Recipients: {}", alert.recipients_count);
    println!("\nDone.");
    Ok(())
}

pub(crate) fn cmd_tools(commander: &Commander) -> Result<()> {
    print!("{}", format_tools(commander));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use novaops_analysis::SimilaritySearch;
    use novaops_incidents::IncidentStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_format_health() {
        let report = check_health(&mut StdRng::seed_from_u64(7), "database");
        let line = format_health(&report);

        assert!(line.contains("database"));
        assert!(line.contains(report.status.as_str()));
        assert!(line.contains(status_marker(report.status)));
    }

    #[test]
    fn test_format_search() {
        let report = SimilaritySearch::default().search_with_rng("redis cache", &mut StdRng::seed_from_u64(1));
        let text = format_search(&report);

        assert!(text.starts_with(&format!("  Found {} similar incidents", report.result_count)));
        for hit in &report.results {
            assert!(text.contains(&hit.incident_id));
        }
    }

    #[test]
    fn test_format_root_cause() {
        let analysis = novaops_analysis::root_cause_analysis("INC-003").unwrap();
        let text = format_root_cause(&analysis);

        assert!(text.contains("[INC-003]"));
        assert!(text.contains("lacks redundancy"));
        assert_eq!(text.matches("    - ").count(), 6);
    }

    #[test]
    fn test_format_dashboard_lists_incidents() {
        let store = IncidentStore::new();
        let incident = store.create("Queue backlog", "high", "consumers stalled");
        let data = get_dashboard_data(&store, &mut StdRng::seed_from_u64(2));
        let text = format_dashboard(&data);

        assert!(text.contains("Active Incidents: 1"));
        assert!(text.contains(&format!("[{}] Queue backlog (high) - open", incident.id)));
        assert!(text.contains("System Health: "));
    }

    #[test]
    fn test_format_tools() {
        let text = format_tools(&Commander::new());
        assert!(text.contains("Monitor Agent"));
        assert!(text.contains("update_incident_status"));
    }

    #[test]
    fn test_execute_incident_adds_to_store() {
        let commander = Commander::new();
        execute(
            Commands::Incident {
                title: "API gateway timeout".to_string(),
                severity: "banana".to_string(),
                description: None,
            },
            &commander,
        )
        .unwrap();

        let incidents = commander.store().list_all();
        assert_eq!(incidents.len(), 1);
        assert_eq!(incidents[0].description, "Incident created via CLI: API gateway timeout");
        assert_eq!(incidents[0].severity.as_str(), "medium");
    }

    #[test]
    fn test_execute_root_cause_unknown_fails() {
        let err = execute(Commands::RootCause { id: "INC-404".to_string() }, &Commander::new()).unwrap_err();
        assert!(err.to_string().contains("INC-404"));
    }
}
