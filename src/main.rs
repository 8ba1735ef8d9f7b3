use tracing_subscriber::EnvFilter;

use vol_to_json::ConvertConfig;
use vol_to_json::parser_registry::ParserRegistry;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let parser_registry = ParserRegistry::new();
    tracing::info!(extensions = ?parser_registry.supported_extensions(), "已注册的解析器");

    let config = ConvertConfig::from_env()?;
    tracing::info!(
        input = %config.input_path().display(),
        output = %config.output_path().display(),
        "转换配置"
    );

    let report = vol_to_json::convert::convert_with(&parser_registry, &config)?;
    tracing::info!(
        voxels = report.voxel_count,
        output = %report.output.display(),
        "转换完成"
    );

    Ok(())
}
