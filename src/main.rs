use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // 初始化日志（输出到 stderr）
    hero_builder::init_logging().context("Failed to initialize logging")?;

    let mage = hero_builder::demo_hero().context("Failed to build demo hero")?;
    tracing::info!(name = mage.name(), "hero ready");
    println!("{mage}");

    Ok(())
}
