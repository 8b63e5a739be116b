use crate::domain::device::{Device, DeviceContext, DeviceHandle, DeviceId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{LazyLock, PoisonError, RwLock};

pub type DeviceFactory = fn(DeviceId, &DeviceContext) -> DeviceHandle;

/// A device that can be created by the registry.
pub trait CreateDevice: Device + Sized + 'static {
    const KIND: &'static str;

    fn create(id: DeviceId, context: &DeviceContext) -> Rc<RefCell<Self>>;
}

static DEVICE_FACTORIES: LazyLock<RwLock<HashMap<&'static str, DeviceFactory>>> = LazyLock::new(|| RwLock::new(HashMap::new()));

pub fn factory_of<T: CreateDevice>() -> DeviceFactory {
    |id: DeviceId, context: &DeviceContext| -> DeviceHandle { T::create(id, context) }
}

pub(in crate::devices) fn register_device<T: CreateDevice>() {
    DEVICE_FACTORIES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(T::KIND, factory_of::<T>());
}

pub fn factory_for(kind: &str) -> Option<DeviceFactory> {
    DEVICE_FACTORIES.read().unwrap_or_else(PoisonError::into_inner).get(kind).copied()
}

pub fn known_kinds() -> Vec<&'static str> {
    let factories = DEVICE_FACTORIES.read().unwrap_or_else(PoisonError::into_inner);
    let mut kinds: Vec<&'static str> = factories.keys().copied().collect();
    kinds.sort_unstable();
    kinds
}
