//! # 产品 CRUD API
//!
//! 一个基于 Axum 的内存产品管理服务，提供：
//! - 产品的创建、查询、更新、删除（内存集合，进程重启后清空）
//! - 单把互斥锁保护的有序集合，每个请求相对其他请求原子生效
//! - CORS 支持与请求日志中间件

pub mod app;
pub mod core;
pub mod infrastructure;
