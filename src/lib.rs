//! Launchgate
//!
//! 启动时的远端信任同步与自更新引擎：安装标识、信任检查、功能开关与自更新。

pub mod bootstrap;
