use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use log::{error, info, LevelFilter};
use pdf2fountain::{convert_file, Conf, ConversionResult, TextPageExtractor};

/// 将从剧本 PDF 中导出的文本转换为 Fountain 格式
#[derive(Parser, Debug)]
#[command(name = "pdf2fountain", version, about)]
struct Cli {
    /// 输入文件(PDF 导出的纯文本，页与页之间以分页符分隔)
    input: PathBuf,

    /// 输出文件，默认与输入同名，扩展名为 .fountain
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 严格模式
    #[arg(long)]
    strict: bool,

    /// 不识别场景标题
    #[arg(long)]
    no_scene_headings: bool,

    /// 不识别角色名
    #[arg(long)]
    no_character_names: bool,

    /// 不附加转换元数据
    #[arg(long)]
    no_metadata: bool,

    /// 输出解析后的 JSON 而不是 Fountain
    #[arg(long)]
    json: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    // 默认值 < 配置文件 < 命令行参数
    fn conf(&self) -> pdf2fountain::ConvertResult<Conf> {
        let mut conf = match &self.config {
            Some(path) => Conf::from_file(path)?,
            None => Conf::default(),
        };
        if self.strict {
            conf.strict_mode = true;
        }
        if self.no_scene_headings {
            conf.detect_scene_headings = false;
        }
        if self.no_character_names {
            conf.detect_character_names = false;
        }
        if self.no_metadata {
            conf.include_metadata = false;
        }
        Ok(conf)
    }

    fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.input.with_extension(if self.json { "json" } else { "fountain" }),
        }
    }
}

fn write_output(cli: &Cli, result: &ConversionResult) -> std::io::Result<PathBuf> {
    let path = cli.output_path();
    let content = if cli.json {
        serde_json::to_string_pretty(&result.document)?
    } else {
        result.fountain.clone().unwrap_or_default()
    };
    std::fs::write(&path, content)?;
    Ok(path)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let conf = match cli.conf() {
        Ok(conf) => conf,
        Err(e) => {
            error!("读取配置失败: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = convert_file(&TextPageExtractor::default(), &cli.input, &conf).await;
    if !result.success {
        for e in &result.errors {
            eprintln!("转换失败: {}", e);
        }
        return ExitCode::FAILURE;
    }

    for warning in &result.warnings {
        eprintln!("警告: {}", warning);
    }

    match write_output(&cli, &result) {
        Ok(path) => {
            if let Some(props) = &result.properties {
                info!("场景数量: {}, 角色数量: {}", props.scene_count, props.characters.len());
            }
            println!("输出已保存到: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("写入输出失败: {}", e);
            ExitCode::FAILURE
        }
    }
}
