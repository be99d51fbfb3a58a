//! 消息服务示例
//!
//! 运行: `RUST_LOG=debug cargo run -p di-impl --example messaging`

use di_abstractions::{implements, DiContainer, Injectable, Resolver, TypeDescriptor, TypeRegistry};
use di_impl::SimpleContainer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

trait Logger: Send + Sync {
    fn write(&self, line: &str);
}

trait Communicator: Send + Sync {
    fn send(&self, to: &str, body: &str);
    fn sent(&self) -> usize;
}

trait MessageService: Send + Sync {
    fn notify(&self, to: &str);
}

struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn write(&self, line: &str) {
        info!("[console] {}", line);
    }
}

impl Injectable for ConsoleLogger {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::new().constructor0(|| ConsoleLogger)
    }
}

implements!(ConsoleLogger => dyn Logger);

struct EmailCommunicator {
    logger: Arc<dyn Logger>,
    sent: AtomicUsize,
}

impl Communicator for EmailCommunicator {
    fn send(&self, to: &str, body: &str) {
        self.sent.fetch_add(1, Ordering::SeqCst);
        self.logger.write(&format!("email to {to}: {body}"));
    }

    fn sent(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }
}

impl Injectable for EmailCommunicator {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::new().constructor1::<dyn Logger, _>(|logger| EmailCommunicator {
            logger,
            sent: AtomicUsize::new(0),
        })
    }
}

implements!(EmailCommunicator => dyn Communicator);

/// 通讯器通过构造函数注入，日志通过属性注入
#[derive(Default)]
struct DefaultMessageService {
    communicator: Option<Arc<dyn Communicator>>,
    logger: Option<Arc<dyn Logger>>,
}

impl MessageService for DefaultMessageService {
    fn notify(&self, to: &str) {
        if let Some(logger) = &self.logger {
            logger.write(&format!("notify {to}"));
        }
        if let Some(communicator) = &self.communicator {
            communicator.send(to, "you have a new message");
        }
    }
}

impl Injectable for DefaultMessageService {
    fn describe() -> TypeDescriptor<Self> {
        TypeDescriptor::new()
            .constructor0(DefaultMessageService::default)
            .constructor1::<dyn Communicator, _>(|communicator| DefaultMessageService {
                communicator: Some(communicator),
                logger: None,
            })
            .inject::<dyn Logger, _>("logger", |this, logger| this.logger = Some(logger))
    }
}

implements!(DefaultMessageService => dyn MessageService);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let container = SimpleContainer::create_instance();
    container.register::<dyn Logger, ConsoleLogger>();
    container.register::<dyn Communicator, EmailCommunicator>();
    container.register::<dyn MessageService, DefaultMessageService>();
    container.use_singleton();

    let first = container.resolve::<dyn MessageService>()?;
    let second = container.resolve::<dyn MessageService>()?;
    first.notify("alice@example.com");
    second.notify("bob@example.com");

    let communicator = container.resolve::<dyn Communicator>()?;
    info!("共发送 {} 封邮件", communicator.sent());
    info!("容器统计: {:?}", container.stats());

    anyhow::ensure!(communicator.sent() == 2, "单例通讯器应当被共享");
    Ok(())
}
