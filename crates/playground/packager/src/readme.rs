use crate::layout::PackageLayout;

/// Usage notes shipped as the last archive entry.
///
/// Browsers refuse to load modules from `file://` URLs, so the README leads
/// with how to serve the directory locally.
pub fn render_readme(layout: &PackageLayout) -> String {
    format!(
        "# WebAssembly Module\n\
         \n\
         This package contains a compiled WebAssembly module and a page that runs it.\n\
         \n\
         ## Files\n\
         \n\
         - `{module}`: the compiled WebAssembly binary\n\
         - `{source}`: the WebAssembly Text Format source it was compiled from\n\
         - `{runner}`: a standalone page that loads and runs the module\n\
         \n\
         ## Running\n\
         \n\
         WebAssembly cannot be loaded from a `file://` path. Serve this directory\n\
         over HTTP and open `{runner}` in a browser.\n\
         \n\
         Any static file server works, for example:\n\
         \n\
         - Python: `python -m http.server 8000`\n\
         - Node.js: `npx serve`\n\
         \n\
         Then visit <http://localhost:8000/{runner}> (adjust the port to match your server).\n\
         \n\
         ## Host imports\n\
         \n\
         The runner provides the `env` namespace:\n\
         \n\
         - `log(value: i32) -> i32` prints `WASM log: <value>` and returns the value\n\
         - `log_string(ptr: i32, len: i32)` prints `len` UTF-8 bytes read at `ptr`\n\
           from the module's exported `memory`\n",
        module = layout.module,
        source = layout.source,
        runner = layout.runner,
    )
}
