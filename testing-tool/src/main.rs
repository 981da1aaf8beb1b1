use anyhow::{bail, Context, Result};
use colored::*;
use serde_json::{json, Value};
use std::io::{self, Write};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> Result<()> {
    println!("{}", "🚘 Fleet Insights Console".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = std::env::var("FLEET_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let client = reqwest::Client::new();

    check_health(&client, &base_url).await?;

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 📊 Ver overview de la flota");
        println!("2. 🚗 Ver rendimiento de un modelo");
        println!("3. 🏭 Ver centros de servicio");
        println!("4. 💬 Preguntar al asistente");
        println!("5. 📸 Refrescar snapshot");
        println!("6. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-6): ")?;

        let outcome = match choice.as_str() {
            "1" => show_overview(&client, &base_url).await,
            "2" => show_model(&client, &base_url).await,
            "3" => show_service_centers(&client, &base_url).await,
            "4" => chat(&client, &base_url).await,
            "5" => refresh_snapshot(&client, &base_url).await,
            "6" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = outcome {
            println!("{}", format!("❌ Error: {:#}", e).bright_red());
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

async fn fetch(request: reqwest::RequestBuilder) -> Result<Value> {
    let response = request.send().await.context("No se pudo contactar el servidor")?;
    let status = response.status();
    let body: Value = response.json().await.context("Respuesta no es JSON")?;

    if !status.is_success() {
        let message = body["message"].as_str().unwrap_or("sin mensaje");
        bail!("HTTP {}: {}", status, message);
    }
    Ok(body)
}

async fn check_health(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!("{}", format!("🔍 Conectando con {} ...", base_url).bright_cyan());
    let body = fetch(client.get(format!("{}/health", base_url))).await?;
    println!("{}", format!("✅ Servicio '{}' en línea", body["service"].as_str().unwrap_or("?")).bright_green());
    Ok(())
}

async fn show_overview(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "📊 OVERVIEW DE LA FLOTA".bright_cyan().bold());
    println!("{}", "=======================".bright_cyan());

    let body = fetch(client.get(format!("{}/api/oem/overview", base_url))).await?;

    println!("Vehículos totales:        {}", body["totalVehicles"]);
    println!("Con incidencias activas:  {}", body["vehiclesWithActiveIssues"]);
    println!("Casos de alta severidad:  {}", body["highSeverityCases"]);
    println!("Demanda prevista (7 días): {}", body["forecastedServiceDemand7Days"]);
    println!();

    println!("{}", "🚗 Por modelo:".bright_blue());
    for model in body["modelSummary"].as_array().into_iter().flatten() {
        let rate = model["failureRate"].as_f64().unwrap_or_default() * 100.0;
        println!(
            "  {:<12} {:>6} vehículos  {:>4} incidencias  {:>5.1}%  {}",
            model["modelName"].as_str().unwrap_or("?"),
            model["vehicles"],
            model["activeIssues"],
            rate,
            model["trend"].as_str().unwrap_or("?")
        );
    }

    println!("{}", "🗺️  Por región:".bright_blue());
    for region in body["regionalSummary"].as_array().into_iter().flatten() {
        println!(
            "  {:<6} {:>6} vehículos  {:>5} incidencias  {:>4} citas",
            region["region"].as_str().unwrap_or("?"),
            region["vehicles"],
            region["activeIssues"],
            region["upcomingAppointments"]
        );
    }
    Ok(())
}

async fn show_model(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let model_id = prompt("ID del modelo (ej: model-x): ")?;
    let body = fetch(client.get(format!("{}/api/oem/models/{}", base_url, model_id))).await?;

    println!();
    println!(
        "{}",
        format!("🚗 {} ({})", body["modelName"].as_str().unwrap_or("?"), body["modelId"].as_str().unwrap_or("?"))
            .bright_cyan()
            .bold()
    );
    println!("Vehículos: {}  Incidencias: {}  Alta severidad: {}", body["totalVehicles"], body["activeIssues"], body["highSeverityCount"]);

    println!("{}", "🔧 Componentes:".bright_blue());
    for component in body["componentBreakdown"].as_array().into_iter().flatten() {
        let severity = &component["severityDistribution"];
        println!(
            "  {:<28} {:>4} incidentes  {:>5.1}%  L/M/H {}/{}/{}",
            component["component"].as_str().unwrap_or("?"),
            component["incidents"],
            component["failurePercentage"].as_f64().unwrap_or_default(),
            severity["LOW"],
            severity["MEDIUM"],
            severity["HIGH"]
        );
    }
    Ok(())
}

async fn show_service_centers(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🏭 CENTROS DE SERVICIO".bright_cyan().bold());
    println!("{}", "======================".bright_cyan());

    let body = fetch(client.get(format!("{}/api/oem/service-centers", base_url))).await?;
    for center in body.as_array().into_iter().flatten() {
        let utilization = center["utilization"].as_str().unwrap_or("?");
        let colored_utilization = match utilization {
            "High" => utilization.bright_red(),
            "Medium" => utilization.bright_yellow(),
            _ => utilization.bright_green(),
        };
        println!(
            "  {:<6} {:<24} {:<6} {:>5} incidencias  {}",
            center["id"].as_str().unwrap_or("?"),
            center["name"].as_str().unwrap_or("?"),
            center["region"].as_str().unwrap_or("?"),
            center["activeIssues"],
            colored_utilization
        );
    }

    let id = prompt("ID para ver detalle (Enter para volver): ")?;
    if id.is_empty() {
        return Ok(());
    }

    let detail = fetch(client.get(format!("{}/api/oem/service-centers/{}", base_url, id))).await?;
    println!();
    println!("{}", format!("📍 {}", detail["location"].as_str().unwrap_or("?")).bright_blue());
    println!("Carga actual: {}%  Carga próxima: {}%", detail["currentLoad"], detail["upcomingLoad"]);
    println!("{}", serde_json::to_string_pretty(&detail["modelsServiced"])?);
    Ok(())
}

async fn chat(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "💬 ASISTENTE DE FLOTA (línea vacía para volver)".bright_cyan().bold());

    let mut history: Vec<Value> = Vec::new();
    loop {
        let message = prompt("Tú: ")?;
        if message.is_empty() {
            return Ok(());
        }

        let payload = json!({
            "message": message,
            "conversationHistory": history,
        });
        let reply = fetch(client.post(format!("{}/api/oem/chat", base_url)).json(&payload)).await?;
        let text = reply["message"].as_str().unwrap_or_default().to_string();
        println!("{} {}", "🤖".bright_green(), text);

        history.push(json!({ "role": "user", "text": message, "timestamp": reply["timestamp"] }));
        history.push(json!({ "role": "assistant", "text": text, "timestamp": reply["timestamp"] }));
    }
}

async fn refresh_snapshot(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let info = fetch(client.post(format!("{}/api/oem/snapshot/refresh", base_url))).await?;
    println!("{}", "📸 Snapshot:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
