//! Host probes: the browser (wasm), the native desktop shell, and fixed fixtures.

use super::snapshot::{HostProbe, ProbeError};

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserProbe;

/// The probe for whichever host this build targets.
#[cfg(target_arch = "wasm32")]
pub fn host_probe() -> impl HostProbe {
    BrowserProbe::new()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn host_probe() -> impl HostProbe {
    NativeProbe
}

/// Desktop shell probe. Only facts std can see are reported; the rest fall back.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeProbe;

impl HostProbe for NativeProbe {
    fn platform(&self) -> Result<String, ProbeError> {
        Ok(format!(
            "{} ({})",
            std::env::consts::OS,
            std::env::consts::ARCH
        ))
    }

    fn user_agent(&self) -> Result<String, ProbeError> {
        Err(ProbeError::Unavailable("user agent"))
    }

    fn hardware_concurrency(&self) -> Result<u32, ProbeError> {
        std::thread::available_parallelism()
            .map(|n| n.get() as u32)
            .map_err(|err| ProbeError::Host {
                field: "hardware concurrency",
                reason: err.to_string(),
            })
    }

    fn device_memory_gb(&self) -> Result<f64, ProbeError> {
        Err(ProbeError::Unavailable("device memory"))
    }

    fn gpu_renderer(&self) -> Result<String, ProbeError> {
        Err(ProbeError::Unavailable("gpu renderer"))
    }

    fn effective_connection_type(&self) -> Result<String, ProbeError> {
        Err(ProbeError::Unavailable("connection type"))
    }

    fn round_trip_ms(&self) -> Result<u32, ProbeError> {
        Err(ProbeError::Unavailable("round trip time"))
    }

    fn online(&self) -> Result<bool, ProbeError> {
        Err(ProbeError::Unavailable("online status"))
    }

    fn screen_size(&self) -> Result<(u32, u32), ProbeError> {
        Err(ProbeError::Unavailable("screen"))
    }

    fn color_depth(&self) -> Result<u32, ProbeError> {
        Err(ProbeError::Unavailable("color depth"))
    }

    fn language(&self) -> Result<String, ProbeError> {
        ["LC_ALL", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|raw| posix_locale_to_tag(&raw))
            .ok_or(ProbeError::Unavailable("language"))
    }
}

/// `en_US.UTF-8` -> `en-US`. `C`/`POSIX` carry no language.
fn posix_locale_to_tag(raw: &str) -> Option<String> {
    let base = raw.split(['.', '@']).next()?.trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// Probe with fixed answers; `None` fields behave like a missing capability.
/// Only the crate's tests construct it.
#[doc(hidden)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureProbe {
    pub platform: Option<String>,
    pub user_agent: Option<String>,
    pub hardware_concurrency: Option<u32>,
    pub device_memory_gb: Option<f64>,
    pub gpu_renderer: Option<String>,
    pub effective_type: Option<String>,
    pub round_trip_ms: Option<u32>,
    pub online: Option<bool>,
    pub screen: Option<(u32, u32)>,
    pub color_depth: Option<u32>,
    pub language: Option<String>,
}

impl FixtureProbe {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A typical Chrome-on-Windows desktop.
    pub fn chrome_desktop() -> Self {
        Self {
            platform: Some("Win32".into()),
            user_agent: Some(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36"
                    .into(),
            ),
            hardware_concurrency: Some(8),
            device_memory_gb: Some(16.0),
            gpu_renderer: Some("ANGLE (NVIDIA GeForce RTX 3070 Direct3D11)".into()),
            effective_type: Some("4g".into()),
            round_trip_ms: Some(50),
            online: Some(true),
            screen: Some((1920, 1080)),
            color_depth: Some(24),
            language: Some("en-US".into()),
        }
    }

    fn field<T: Clone>(value: &Option<T>, name: &'static str) -> Result<T, ProbeError> {
        value.clone().ok_or(ProbeError::Unavailable(name))
    }
}

impl HostProbe for FixtureProbe {
    fn platform(&self) -> Result<String, ProbeError> {
        Self::field(&self.platform, "platform")
    }

    fn user_agent(&self) -> Result<String, ProbeError> {
        Self::field(&self.user_agent, "user agent")
    }

    fn hardware_concurrency(&self) -> Result<u32, ProbeError> {
        Self::field(&self.hardware_concurrency, "hardware concurrency")
    }

    fn device_memory_gb(&self) -> Result<f64, ProbeError> {
        Self::field(&self.device_memory_gb, "device memory")
    }

    fn gpu_renderer(&self) -> Result<String, ProbeError> {
        Self::field(&self.gpu_renderer, "gpu renderer")
    }

    fn effective_connection_type(&self) -> Result<String, ProbeError> {
        Self::field(&self.effective_type, "connection type")
    }

    fn round_trip_ms(&self) -> Result<u32, ProbeError> {
        Self::field(&self.round_trip_ms, "round trip time")
    }

    fn online(&self) -> Result<bool, ProbeError> {
        Self::field(&self.online, "online status")
    }

    fn screen_size(&self) -> Result<(u32, u32), ProbeError> {
        Self::field(&self.screen, "screen")
    }

    fn color_depth(&self) -> Result<u32, ProbeError> {
        Self::field(&self.color_depth, "color depth")
    }

    fn language(&self) -> Result<String, ProbeError> {
        Self::field(&self.language, "language")
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use js_sys::Reflect;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlCanvasElement, Navigator, Screen, WebGlRenderingContext, Window};

    use crate::scan::snapshot::{HostProbe, ProbeError};

    const DEBUG_RENDERER_INFO: &str = "WEBGL_debug_renderer_info";
    const UNMASKED_RENDERER_WEBGL: u32 = 0x9246;

    /// Reads navigator, screen and WebGL metadata the page already has access to.
    pub struct BrowserProbe {
        window: Option<Window>,
    }

    impl BrowserProbe {
        pub fn new() -> Self {
            Self {
                window: web_sys::window(),
            }
        }

        fn window(&self) -> Result<&Window, ProbeError> {
            self.window.as_ref().ok_or(ProbeError::Unavailable("window"))
        }

        fn navigator(&self) -> Result<Navigator, ProbeError> {
            Ok(self.window()?.navigator())
        }

        fn screen(&self) -> Result<Screen, ProbeError> {
            self.window()?
                .screen()
                .map_err(|err| host_error("screen", err))
        }

        /// `navigator.connection` is not in every engine, so it is read by reflection.
        fn connection_field(&self, field: &'static str) -> Result<JsValue, ProbeError> {
            let connection = reflect(&self.navigator()?, "connection")?;
            if connection.is_undefined() || connection.is_null() {
                return Err(ProbeError::Unavailable("navigator.connection"));
            }
            reflect(&connection, field)
        }

        fn webgl_context(&self) -> Result<WebGlRenderingContext, ProbeError> {
            let document = self
                .window()?
                .document()
                .ok_or(ProbeError::Unavailable("document"))?;
            let canvas: HtmlCanvasElement = document
                .create_element("canvas")
                .map_err(|err| host_error("canvas", err))?
                .dyn_into()
                .map_err(|_| ProbeError::Unavailable("canvas"))?;

            for kind in ["webgl", "experimental-webgl"] {
                if let Ok(Some(ctx)) = canvas.get_context(kind) {
                    if let Ok(gl) = ctx.dyn_into::<WebGlRenderingContext>() {
                        return Ok(gl);
                    }
                }
            }
            Err(ProbeError::Unavailable("webgl"))
        }
    }

    impl Default for BrowserProbe {
        fn default() -> Self {
            Self::new()
        }
    }

    impl HostProbe for BrowserProbe {
        fn platform(&self) -> Result<String, ProbeError> {
            self.navigator()?
                .platform()
                .map_err(|err| host_error("platform", err))
        }

        fn user_agent(&self) -> Result<String, ProbeError> {
            self.navigator()?
                .user_agent()
                .map_err(|err| host_error("user agent", err))
        }

        fn hardware_concurrency(&self) -> Result<u32, ProbeError> {
            Ok(self.navigator()?.hardware_concurrency() as u32)
        }

        fn device_memory_gb(&self) -> Result<f64, ProbeError> {
            reflect(&self.navigator()?, "deviceMemory")?
                .as_f64()
                .ok_or(ProbeError::Unavailable("navigator.deviceMemory"))
        }

        fn gpu_renderer(&self) -> Result<String, ProbeError> {
            let gl = self.webgl_context()?;
            gl.get_extension(DEBUG_RENDERER_INFO)
                .map_err(|err| host_error("webgl extension", err))?
                .ok_or(ProbeError::Unavailable(DEBUG_RENDERER_INFO))?;
            gl.get_parameter(UNMASKED_RENDERER_WEBGL)
                .map_err(|err| host_error("webgl renderer", err))?
                .as_string()
                .ok_or(ProbeError::Unavailable("webgl renderer"))
        }

        fn effective_connection_type(&self) -> Result<String, ProbeError> {
            self.connection_field("effectiveType")?
                .as_string()
                .ok_or(ProbeError::Unavailable("connection.effectiveType"))
        }

        fn round_trip_ms(&self) -> Result<u32, ProbeError> {
            self.connection_field("rtt")?
                .as_f64()
                .map(|ms| ms.max(0.0) as u32)
                .ok_or(ProbeError::Unavailable("connection.rtt"))
        }

        fn online(&self) -> Result<bool, ProbeError> {
            Ok(self.navigator()?.on_line())
        }

        fn screen_size(&self) -> Result<(u32, u32), ProbeError> {
            let screen = self.screen()?;
            let width = screen.width().map_err(|err| host_error("screen", err))?;
            let height = screen.height().map_err(|err| host_error("screen", err))?;
            Ok((width.max(0) as u32, height.max(0) as u32))
        }

        fn color_depth(&self) -> Result<u32, ProbeError> {
            self.screen()?
                .color_depth()
                .map(|bits| bits.max(0) as u32)
                .map_err(|err| host_error("color depth", err))
        }

        fn language(&self) -> Result<String, ProbeError> {
            self.navigator()?
                .language()
                .ok_or(ProbeError::Unavailable("navigator.language"))
        }
    }

    fn reflect(target: &JsValue, field: &'static str) -> Result<JsValue, ProbeError> {
        Reflect::get(target, &JsValue::from_str(field)).map_err(|err| host_error(field, err))
    }

    fn host_error(field: &'static str, err: JsValue) -> ProbeError {
        ProbeError::Host {
            field,
            reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        }
    }
}
