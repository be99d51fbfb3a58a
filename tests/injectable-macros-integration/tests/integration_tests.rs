//! 派生宏集成测试

use di_abstractions::{DependencyError, Injectable, Resolver, TypeKey, TypeRegistry};
use di_impl::SimpleContainer;
use infrastructure_common::DependencyResult;
use injectable_macros::Injectable;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

trait Logger: Send + Sync {
    fn log(&self, message: &str) -> String;
}

trait Audit: Send + Sync {
    fn record(&self);
    fn count(&self) -> usize;
}

trait Service: Send + Sync {
    fn run(&self) -> String;
    fn audited(&self) -> bool;
    fn untouched(&self) -> bool;
    fn name(&self) -> &str;
}

#[derive(Injectable)]
#[injectable(implements(dyn Logger))]
struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) -> String {
        format!("[console] {message}")
    }
}

#[derive(Injectable)]
#[injectable(implements(dyn Audit))]
struct MemoryAudit {
    records: AtomicUsize,
}

impl Audit for MemoryAudit {
    fn record(&self) {
        self.records.fetch_add(1, Ordering::SeqCst);
    }

    fn count(&self) -> usize {
        self.records.load(Ordering::SeqCst)
    }
}

#[derive(Injectable)]
#[injectable(implements(dyn Service))]
struct ServiceImpl {
    logger: Arc<dyn Logger>,
    #[inject]
    audit: Option<Arc<dyn Audit>>,
    untouched: Option<Arc<dyn Audit>>,
    name: String,
}

impl Service for ServiceImpl {
    fn run(&self) -> String {
        if let Some(audit) = &self.audit {
            audit.record();
        }
        self.logger.log("run")
    }

    fn audited(&self) -> bool {
        self.audit.is_some()
    }

    fn untouched(&self) -> bool {
        self.untouched.is_none()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// 同时实现两个接口
#[derive(Injectable)]
#[injectable(implements(dyn Logger, dyn Audit))]
struct Combined {
    hits: AtomicUsize,
}

impl Logger for Combined {
    fn log(&self, message: &str) -> String {
        format!("[combined] {message}")
    }
}

impl Audit for Combined {
    fn record(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    fn count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

trait Report: Send + Sync {
    fn summary(&self) -> String;
}

/// 两个构造参数
#[derive(Injectable)]
#[injectable(implements(dyn Report))]
struct Reporter {
    audit: Arc<dyn Audit>,
    logger: Arc<dyn Logger>,
}

impl Report for Reporter {
    fn summary(&self) -> String {
        self.audit.record();
        self.logger.log(&self.audit.count().to_string())
    }
}

fn registered_container() -> SimpleContainer {
    let container = SimpleContainer::create_instance();
    container.register::<dyn Logger, ConsoleLogger>();
    container.register::<dyn Audit, MemoryAudit>();
    container.register::<dyn Service, ServiceImpl>();
    container
}

#[test]
fn test_derived_descriptor_shape() {
    let descriptor = ServiceImpl::describe();
    assert_eq!(descriptor.type_key(), TypeKey::of::<ServiceImpl>());
    assert_eq!(descriptor.constructor_count(), 1);

    let constructor = descriptor.select_constructor().unwrap();
    assert_eq!(constructor.parameters, vec![TypeKey::of::<dyn Logger>()]);

    let properties = descriptor.properties();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "audit");
    assert_eq!(properties[0].type_key, TypeKey::of::<dyn Audit>());
    assert!(properties[0].injectable);
}

#[test]
fn test_unit_struct_has_zero_arg_constructor() {
    let constructor = ConsoleLogger::describe().select_constructor().unwrap();
    assert_eq!(constructor.arity(), 0);
    assert!(ConsoleLogger::describe().properties().is_empty());
}

#[test]
fn test_resolve_derived_service() -> DependencyResult<()> {
    let container = registered_container();

    let service = container.resolve::<dyn Service>()?;
    assert_eq!(service.run(), "[console] run");
    Ok(())
}

#[test]
fn test_marked_field_injected_unmarked_left_default() -> DependencyResult<()> {
    let container = registered_container();

    let service = container.resolve::<dyn Service>()?;
    assert!(service.audited());
    assert!(service.untouched());
    assert!(service.name().is_empty());
    Ok(())
}

#[test]
fn test_one_type_two_interfaces() -> DependencyResult<()> {
    let container = SimpleContainer::create_instance();
    container.register::<dyn Logger, Combined>();
    container.register::<dyn Audit, Combined>();

    let logger = container.resolve::<dyn Logger>()?;
    let audit = container.resolve::<dyn Audit>()?;
    audit.record();

    assert_eq!(logger.log("x"), "[combined] x");
    assert_eq!(audit.count(), 1);
    Ok(())
}

#[test]
fn test_missing_constructor_dependency() {
    let container = SimpleContainer::create_instance();
    container.register::<dyn Service, ServiceImpl>();

    let error = container.resolve::<dyn Service>().err().expect("解析应当失败");
    assert!(matches!(error, DependencyError::Resolution { .. }));
    assert!(error.root_cause().is_not_registered());
}

#[test]
fn test_two_arc_fields_keep_declaration_order() -> DependencyResult<()> {
    let constructor = Reporter::describe().select_constructor().unwrap();
    assert_eq!(
        constructor.parameters,
        vec![TypeKey::of::<dyn Audit>(), TypeKey::of::<dyn Logger>()]
    );

    let container = registered_container();
    container.register::<dyn Report, Reporter>();

    let report = container.resolve::<dyn Report>()?;
    assert_eq!(report.summary(), "[console] 1");
    Ok(())
}
