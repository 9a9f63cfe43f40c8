//! 自动映射的集中测试工程，测试位于 `tests/` 目录
