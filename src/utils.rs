use wasm_bindgen::JsValue;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Console logging that also works when the crate is used natively (tests),
// where the browser console isn't there to call into
#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(message: &str) {
    eprintln!("{}", message);
}

#[cfg(target_arch = "wasm32")]
pub fn log_error(context: &str, err: &JsValue) {
    web_sys::console::error_2(&context.into(), err);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_error(context: &str, _err: &JsValue) {
    eprintln!("{}", context);
}
