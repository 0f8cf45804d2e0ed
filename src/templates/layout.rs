// src/templates/layout.rs

pub fn render_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} - Documenso</title>
    <style>
        body {{ margin: 0; font-family: system-ui, sans-serif; color: #111827; background: #fff; }}
        .auth-container {{ display: flex; min-height: 100vh; align-items: center; justify-content: center; padding: 3rem 1rem; }}
        .auth-card {{ width: 100%; max-width: 28rem; }}
        .auth-card h2 {{ text-align: center; font-size: 1.875rem; font-weight: 700; }}
        .auth-card .subtitle {{ text-align: center; font-size: 0.875rem; color: #4b5563; }}
        .sr-only {{ position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0, 0, 0, 0); }}
        .auth-form input[type="email"], .auth-form input[type="password"] {{
            display: block; width: 100%; box-sizing: border-box;
            border: 1px solid #d1d5db; padding: 0.5rem 0.75rem; font-size: 0.875rem;
        }}
        .btn-primary {{ width: 100%; margin-top: 1.5rem; padding: 0.5rem 1rem; border: 0; border-radius: 0.375rem; background: #37f095; color: #fff; font-weight: 500; cursor: pointer; }}
        .auth-footer {{ text-align: center; font-size: 0.875rem; color: #4b5563; }}
        .auth-footer a {{ color: #37f095; font-weight: 500; }}
        .error-panel {{ display: flex; border-radius: 0.375rem; background: #fef2f2; padding: 1rem; margin-bottom: 1rem; }}
        .error-panel .icon {{ flex-shrink: 0; width: 1.25rem; height: 1.25rem; color: #f87171; }}
        .error-panel .messages {{ margin-left: 0.75rem; }}
        .error-panel h3 {{ margin: 0; font-size: 0.875rem; font-weight: 500; color: #991b1b; }}
        .toasts {{ position: fixed; top: 1rem; left: 50%; transform: translateX(-50%); }}
        .toast {{ min-width: 200px; padding: 0.75rem 1rem; border-radius: 0.5rem; background: #fff; box-shadow: 0 3px 10px rgba(0,0,0,0.1); }}
        .toast-error {{ color: #991b1b; }}
    </style>
</head>
<body>
    <main class="main">
        {}
    </main>
</body>
</html>"#,
        title, content
    )
}
