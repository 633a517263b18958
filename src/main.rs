//! # xrdstack - 堆叠衍射图样比较绘图工具
//!
//! 从 JSON 峰列表合成伪衍射谱，并渲染为共享 2θ 轴的纵向堆叠面板。
//!
//! ## 子命令
//! - `plot`   - 渲染堆叠比较图 (PNG/SVG)
//! - `export` - 导出峰列表或合成曲线 (CSV/XY)
//! - `info`   - 打印单个文件的峰表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (JSON 峰列表解析)
//!   │     ├── profile/   (峰形合成核心)
//!   │     ├── render/    (堆叠面板渲染)
//!   │     └── batch/     (文件收集与并行执行)
//!   ├── models/     (数据模型)
//!   ├── export.rs   (数据导出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod export;
mod models;
mod parsers;
mod profile;
mod render;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
