use clap::Parser;

use crate::input::parse_worker_count;
use crate::worker::DEFAULT_INTERVAL;

/// 按固定间隔随机轮换 Discord 自定义状态
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<String>,

    /// 状态列表文件路径
    #[arg(short, long)]
    pub statuses: Option<String>,

    /// worker 数量（不指定时从标准输入读取，负数按 0 处理）
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_worker_count)]
    pub workers: Option<usize>,

    /// 轮换间隔（秒）
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_INTERVAL.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["status-rotator"]);
        assert!(args.config.is_none());
        assert!(args.statuses.is_none());
        assert!(args.workers.is_none());
        assert_eq!(args.interval, 5);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "status-rotator",
            "-c",
            "my.yml",
            "--statuses",
            "list.json",
            "-w",
            "3",
            "--interval",
            "10",
        ]);
        assert_eq!(args.config.as_deref(), Some("my.yml"));
        assert_eq!(args.statuses.as_deref(), Some("list.json"));
        assert_eq!(args.workers, Some(3));
        assert_eq!(args.interval, 10);
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(Args::try_parse_from(["status-rotator", "-i", "0"]).is_err());
    }

    #[test]
    fn test_negative_workers_means_zero() {
        let args = Args::parse_from(["status-rotator", "-w", "-1"]);
        assert_eq!(args.workers, Some(0));
    }

    #[test]
    fn test_non_integer_workers_rejected() {
        assert!(Args::try_parse_from(["status-rotator", "-w", "two"]).is_err());
    }
}
