//! WebAssembly boundary for the universe engine.
//!
//! A thin wrapper that a canvas harness drives through `wasm_bindgen`. The
//! change-buffer getters hand out raw pointer/length pairs so the harness
//! can view the interleaved `[row, col, ...]` pairs as a `Uint32Array` over
//! wasm linear memory without copying; the addresses stay valid until the
//! next call into the engine.

use crate::{Universe, UniverseError};
use wasm_bindgen::prelude::*;

/// Installs the panic hook for readable errors in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(err: UniverseError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WasmUniverse {
    inner: Universe,
}

#[wasm_bindgen]
impl WasmUniverse {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<WasmUniverse, JsValue> {
        let inner = Universe::new(width as usize, height as usize).map_err(to_js)?;
        Ok(WasmUniverse { inner })
    }

    /// Builds a randomly filled universe at the default fill rate.
    pub fn random(width: u32, height: u32, seed: Option<u64>) -> Result<WasmUniverse, JsValue> {
        let inner = Universe::random(width as usize, height as usize, seed).map_err(to_js)?;
        Ok(WasmUniverse { inner })
    }

    pub fn tick(&mut self) {
        self.inner.tick();
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), JsValue> {
        self.inner
            .toggle_cell(row as usize, col as usize)
            .map_err(to_js)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        self.inner.randomize(seed, fill_rate);
    }

    #[wasm_bindgen(js_name = getWidth)]
    pub fn get_width(&self) -> u32 {
        self.inner.width() as u32
    }

    #[wasm_bindgen(js_name = getHeight)]
    pub fn get_height(&self) -> u32 {
        self.inner.height() as u32
    }

    #[wasm_bindgen(js_name = getNewAlive)]
    pub fn get_new_alive(&self) -> *const u32 {
        self.inner.newly_alive().as_ptr()
    }

    #[wasm_bindgen(js_name = getAliveLen)]
    pub fn get_new_alive_len(&self) -> usize {
        self.inner.newly_alive().len()
    }

    #[wasm_bindgen(js_name = getNewDead)]
    pub fn get_new_dead(&self) -> *const u32 {
        self.inner.newly_dead().as_ptr()
    }

    #[wasm_bindgen(js_name = getDeadLen)]
    pub fn get_new_dead_len(&self) -> usize {
        self.inner.newly_dead().len()
    }
}
