use std::ffi::c_void;

pub type Void = c_void;

/// An untyped memory location handed to copy functions.
///
/// The referenced memory must hold an initialized value of whatever type the
/// copy function was registered for; typed access with any other type is
/// undefined behavior (a caller contract violation, not a recoverable error).
#[derive(Hash, PartialEq, Eq, Copy, Clone, Debug)]
pub struct MemAddr(*mut Void);

impl MemAddr {
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn null() -> Self {
        MemAddr(std::ptr::null_mut())
    }

    pub fn from_mut(ptr: *mut Void) -> Self {
        MemAddr(ptr)
    }

    pub fn from_const(ptr: *const Void) -> Self {
        MemAddr(ptr as *mut Void)
    }

    /// Address of a borrowed value.
    pub fn of<T>(value: &T) -> Self {
        MemAddr::from_const(value as *const T as *const Void)
    }

    /// Address of a mutably borrowed value.
    pub fn of_mut<T>(value: &mut T) -> Self {
        MemAddr::from_mut(value as *mut T as *mut Void)
    }

    pub fn as_ptr(&self) -> *const Void {
        self.0
    }

    pub fn as_mut_ptr(&mut self) -> *mut Void {
        self.0
    }

    pub fn read<T: Copy>(&self) -> T {
        assert!(!self.is_null(), "Tried to access a null MemAddr");
        assert_eq!(
            self.0 as usize % std::mem::align_of::<T>(),
            0,
            "Unaligned MemAddr"
        );
        unsafe { self.0.cast::<T>().read() }
    }

    pub fn write<T>(&mut self, value: T) {
        assert!(!self.is_null(), "Tried to access a null MemAddr");
        assert_eq!(
            self.0 as usize % std::mem::align_of::<T>(),
            0,
            "Unaligned MemAddr"
        );
        unsafe {
            self.0.cast::<T>().write(value);
        }
    }

    pub fn as_ref<T>(&self) -> &T {
        assert!(!self.is_null(), "Tried to access a null MemAddr");
        assert_eq!(
            self.0 as usize % std::mem::align_of::<T>(),
            0,
            "Unaligned MemAddr"
        );
        unsafe { self.0.cast::<T>().as_ref().unwrap() }
    }

    pub fn as_mut<T>(&mut self) -> &mut T {
        assert!(!self.is_null(), "Tried to access a null MemAddr");
        assert_eq!(
            self.0 as usize % std::mem::align_of::<T>(),
            0,
            "Unaligned MemAddr"
        );
        unsafe { self.0.cast::<T>().as_mut().unwrap() }
    }
}

unsafe impl Send for MemAddr {}
unsafe impl Sync for MemAddr {}
