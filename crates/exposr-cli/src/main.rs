//! # exposr-cli
//!
//! EXPOSR 명령행 드라이버.
//! 캡처 도구가 내보낸 요소 스냅샷/네트워크 로그(JSON)를 읽어
//! 스캔과 감사를 실행하고 결과를 JSON으로 내보낸다.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use exposr_audit::classifier::ScanContext;
use exposr_audit::report::run_audit;
use exposr_audit::scanner::Scanner;
use exposr_core::config::AppConfig;
use exposr_core::models::element::ElementSnapshot;
use exposr_core::models::network::NetworkRecord;
use exposr_core::models::scan::PageScanResult;

/// EXPOSR — 숨은 이미지 감사 도구
///
/// 높이 0으로 렌더링됐지만 다운로드된 <img>를 찾아 낭비 바이트를 보고한다
#[derive(Parser, Debug)]
#[command(name = "exposr")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,

    /// 설정 파일 경로 (JSON, 미지정 시 기본값)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 요소 스냅샷을 스캔해 숨은 이미지 레코드를 추출
    Scan {
        /// 요소 스냅샷 JSON 경로
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// 결과 출력 경로 (미지정 시 stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// 들여쓰기된 JSON으로 출력
        #[arg(long)]
        pretty: bool,
    },
    /// 스캔 결과를 네트워크 로그와 대조해 감사 리포트 생성
    Audit {
        /// 스캔 결과 JSON 경로
        #[arg(long, short = 's')]
        scan: PathBuf,

        /// 네트워크 로그 JSON 경로
        #[arg(long, short = 'n')]
        network: PathBuf,

        /// 결과 출력 경로 (미지정 시 stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// 들여쓰기된 JSON으로 출력
        #[arg(long)]
        pretty: bool,
    },
}

/// scan 서브커맨드 입력 포맷
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScanInput {
    /// 캡처된 <img> 요소 스냅샷 (문서 순서)
    #[serde(default)]
    elements: Vec<ElementSnapshot>,
    /// 캡처 시점에 lazy-load 라이브러리가 활성이었는지
    #[serde(default)]
    lazy_library_active: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Scan {
            input,
            output,
            pretty,
        } => cmd_scan(&config, &input, output.as_deref(), pretty),
        Command::Audit {
            scan,
            network,
            output,
            pretty,
        } => cmd_audit(&config, &scan, &network, output.as_deref(), pretty),
    }
}

/// 설정 로드 — 경로 미지정 시 기본 설정
fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("설정 파일 읽기 실패: {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("설정 파일 파싱 실패: {}", path.display()))
        }
        None => Ok(AppConfig::default_config()),
    }
}

fn cmd_scan(
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("입력 파일 읽기 실패: {}", input.display()))?;
    let scan_input: ScanInput = serde_json::from_str(&raw)
        .with_context(|| format!("요소 스냅샷 파싱 실패: {}", input.display()))?;

    if scan_input.elements.is_empty() {
        // 코어는 빈 결과를 돌려줄 뿐, 보고는 드라이버의 몫
        warn!("페이지에서 이미지를 찾지 못함: {}", input.display());
    }

    let ctx = if scan_input.lazy_library_active {
        ScanContext::with_markers(config.scan.lazy_markers.iter().cloned())
    } else {
        ScanContext::new()
    };

    let result = Scanner::new(ctx).scan(&scan_input.elements);
    info!(flagged = result.images.len(), "스캔 완료");

    write_output(&serde_json::to_value(&result)?, output, pretty)
}

fn cmd_audit(
    config: &AppConfig,
    scan: &Path,
    network: &Path,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let scan_raw = fs::read_to_string(scan)
        .with_context(|| format!("스캔 결과 읽기 실패: {}", scan.display()))?;
    let scan_result: PageScanResult = serde_json::from_str(&scan_raw)
        .with_context(|| format!("스캔 결과 파싱 실패: {}", scan.display()))?;

    let network_raw = fs::read_to_string(network)
        .with_context(|| format!("네트워크 로그 읽기 실패: {}", network.display()))?;
    let records: Vec<NetworkRecord> = serde_json::from_str(&network_raw)
        .with_context(|| format!("네트워크 로그 파싱 실패: {}", network.display()))?;

    if records.is_empty() {
        warn!("네트워크 로그가 비어 있음: {}", network.display());
    }

    let report = run_audit(&scan_result, &records, &config.score);
    write_output(&serde_json::to_value(&report)?, output, pretty)
}

/// 결과를 파일 또는 stdout으로 내보낸다
fn write_output(value: &serde_json::Value, output: Option<&Path>, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("결과 쓰기 실패: {}", path.display()))?;
            info!("결과 저장: {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
