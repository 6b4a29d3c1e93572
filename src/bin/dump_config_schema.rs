use anyhow::Result;
use serde_json::json;

fn main() -> Result<()> {
    let schemas = json!({
        "config": erdraw::Config::json_schema(),
        "scene": erdraw::Scene::json_schema(),
    });
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}
