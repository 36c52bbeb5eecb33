//! Standalone HTML page that runs the packaged module in a browser.
//!
//! The page provides the same `env` imports as the native sandbox, so a
//! packaged module behaves the same on both sides.

use crate::layout::PackageLayout;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>WebAssembly Runner</title>
    <style>
        body {
            font-family: system-ui, -apple-system, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 2rem;
            background: #1a1a1a;
            color: #eee;
        }
        .output {
            background: #111;
            border: 1px solid #333;
            border-radius: 4px;
            padding: 1rem;
            min-height: 100px;
            font-family: monospace;
            white-space: pre-wrap;
        }
        button {
            background: #646cff;
            color: white;
            border: none;
            padding: 8px 16px;
            border-radius: 4px;
            cursor: pointer;
        }
        .success { color: #55ff55; }
        .error { color: #ff5555; }
    </style>
</head>
<body>
    <h1>WebAssembly Runner</h1>
    <button id="run">Run</button>
    <div id="output" class="output">Press "Run" to execute the module.</div>
    <script>
        const MODULE_URL = "__MODULE__";
        const ENTRY_POINT = "__ENTRY__";
        const output = document.getElementById("output");

        function line(text, cls) {
            const div = document.createElement("div");
            div.textContent = text;
            if (cls) div.className = cls;
            output.appendChild(div);
        }

        async function run() {
            output.textContent = "";
            let instance = null;
            const imports = {
                env: {
                    log: (value) => {
                        line(`WASM log: ${value}`);
                        return value;
                    },
                    log_string: (ptr, len) => {
                        const memory = instance && instance.exports.memory;
                        if (!(memory instanceof WebAssembly.Memory)) {
                            throw new Error("module does not export a linear memory named `memory`");
                        }
                        const bytes = new Uint8Array(memory.buffer, ptr, len);
                        line(`WASM log: ${new TextDecoder().decode(bytes)}`);
                    },
                },
            };
            try {
                const response = await fetch(MODULE_URL);
                if (!response.ok) {
                    throw new Error(`failed to fetch ${MODULE_URL}: ${response.status}`);
                }
                const module = await WebAssembly.compile(await response.arrayBuffer());
                instance = await WebAssembly.instantiate(module, imports);
                const entry = instance.exports[ENTRY_POINT];
                if (typeof entry === "function" && entry.length === 0) {
                    const result = entry();
                    if (result === undefined) {
                        line("No results returned", "success");
                    } else {
                        line(`${ENTRY_POINT}: ${result}`, "success");
                    }
                } else {
                    line("No results returned", "success");
                }
            } catch (error) {
                line(`Runtime error: ${error.message}`, "error");
            }
        }

        document.getElementById("run").addEventListener("click", run);
    </script>
</body>
</html>
"#;

/// Render the runner page for `layout`, invoking `entry_point` if exported.
pub fn render_runner(layout: &PackageLayout, entry_point: &str) -> String {
    TEMPLATE
        .replace("__MODULE__", &escape(&layout.module))
        .replace("__ENTRY__", &escape(entry_point))
}

/// Minimal escaping for values placed inside a JS string literal in HTML.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\u0022"),
            '\\' => out.push_str("\\\\"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' | '\u{2029}' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
