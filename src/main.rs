use clap::Parser;
use gen_day::utils::{logger, validation::Validate};
use gen_day::{CliConfig, Day, ScaffoldPlan, Scaffolder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Starting gen-day");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 建立當日的鷹架計畫
    let day = Day::new(config.day)?;
    let plan = ScaffoldPlan::new(day, config.with_tests);
    let scaffolder = Scaffolder::new(&config.root);

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&scaffolder, &plan, &config);
        return Ok(());
    }

    // 產生檔案並輸出結果
    match scaffolder.generate(&plan) {
        Ok(report) => {
            for path in &report.created {
                println!("📝 Created {}", path.display());
            }
            println!("✅ {} scaffolded successfully!", day);
            println!(
                "📖 Find today's instructions at: {}",
                day.puzzle_url(config.year)
            );
            println!("📥 Find today's input at: {}", day.input_url(config.year));
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Scaffolding failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼（用法錯誤由 clap 自行以 2 退出）
            let exit_code = match e.severity() {
                gen_day::utils::error::ErrorSeverity::Low => 0, // 已存在，安全的無操作
                gen_day::utils::error::ErrorSeverity::Medium => 2,
                gen_day::utils::error::ErrorSeverity::High => 1, // 驗證錯誤
                gen_day::utils::error::ErrorSeverity::Critical => 3, // 檔案系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn perform_dry_run(scaffolder: &Scaffolder, plan: &ScaffoldPlan, config: &CliConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();
    println!("📅 Target: {} (year {})", plan.day, config.year);

    if scaffolder.stub_exists(plan) {
        println!(
            "⚠️ {} already exists, nothing would be written",
            plan.stub_path.display()
        );
        return;
    }

    // 與真正執行共用同一份清單，已存在的輸入檔不會被列出
    for path in scaffolder.pending_paths(plan) {
        println!("  Would create: {}", path.display());
    }

    println!();
    println!("📖 Instructions: {}", plan.day.puzzle_url(config.year));
    println!("📥 Input: {}", plan.day.input_url(config.year));
}
