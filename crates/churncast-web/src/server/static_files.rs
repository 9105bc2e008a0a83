use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "assets"]
struct WebAssets;

/// Serve embedded static assets; the form page ships as a built-in
/// fallback so the binary works without a separate frontend build.
pub async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Try exact path first
    if let Some(content) = <WebAssets as Embed>::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response();
    }

    // Serve index.html if a frontend build is embedded
    if let Some(content) = <WebAssets as Embed>::get("index.html") {
        return Html(String::from_utf8_lossy(&content.data).to_string()).into_response();
    }

    Html(FORM_HTML.to_string()).into_response()
}

const FORM_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Customer Churn Predictor</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-900 text-white min-h-screen">
    <div class="container mx-auto px-4 py-8 max-w-4xl">
        <header class="mb-6 text-center">
            <h1 class="text-4xl font-bold text-blue-400">Customer Churn Predictor</h1>
            <div class="flex justify-center mt-4">
                <img src="/mascot.svg" alt="Alex" class="w-40 h-40">
            </div>
            <p class="text-gray-400 mt-2">Meet Alex &ndash; Our Curious Customer!</p>
            <p class="text-gray-300 mt-4">Enter customer details below to check if they're likely to churn!</p>
        </header>

        <form id="churn-form" class="bg-gray-800 rounded-lg p-6">
            <h2 class="text-xl font-semibold mb-4">Customer Information</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="space-y-3">
                    <label class="block"><span class="text-sm text-gray-400">Age</span>
                        <input type="number" name="age" min="18" max="100" step="1" value="30" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Tenure (months)</span>
                        <input type="number" name="tenure" min="0" max="120" step="1" value="24" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Usage Frequency (per month)</span>
                        <input type="number" name="usage_frequency" min="0" max="100" step="1" value="12" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Support Calls</span>
                        <input type="number" name="support_calls" min="0" max="50" step="1" value="2" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Payment Delay (days)</span>
                        <input type="number" name="payment_delay" min="0" max="30" step="1" value="5" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Total Spend ($)</span>
                        <input type="number" name="total_spend" min="0" max="10000" step="0.01" value="1000" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Days Since Last Interaction</span>
                        <input type="number" name="last_interaction" min="0" max="365" step="1" value="30" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Customer Lifetime Value (CLV)</span>
                        <input type="number" name="lifetime_value" min="0" max="50000" step="0.01" value="5000" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Monthly Spend ($)</span>
                        <input type="number" name="monthly_spend" min="0" max="5000" step="0.01" value="50" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                </div>
                <div class="space-y-3">
                    <label class="block"><span class="text-sm text-gray-400">Usage Intensity</span>
                        <input type="number" name="usage_intensity" min="0" max="1" step="0.01" value="0.5" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Support Call Rate</span>
                        <input type="number" name="support_call_rate" min="0" max="1" step="0.01" value="0.1" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Last Interaction Ratio</span>
                        <input type="number" name="interaction_ratio" min="0" max="1" step="0.01" value="0.2" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Payment Delay/Tenure Ratio</span>
                        <input type="number" name="delay_ratio" min="0" max="2" step="0.01" value="0.2" required class="mt-1 w-full bg-gray-700 rounded px-3 py-2"></label>
                    <label class="block"><span class="text-sm text-gray-400">Gender</span>
                        <select name="gender" class="mt-1 w-full bg-gray-700 rounded px-3 py-2">
                            <option>Male</option><option>Female</option>
                        </select></label>
                    <label class="block"><span class="text-sm text-gray-400">Subscription Type</span>
                        <select name="subscription_type" class="mt-1 w-full bg-gray-700 rounded px-3 py-2">
                            <option>Basic</option><option>Standard</option><option>Premium</option>
                        </select></label>
                    <label class="block"><span class="text-sm text-gray-400">Contract Length</span>
                        <select name="contract_length" class="mt-1 w-full bg-gray-700 rounded px-3 py-2">
                            <option>Monthly</option><option>Quarterly</option><option>Annual</option>
                        </select></label>
                    <label class="block"><span class="text-sm text-gray-400">Age Group</span>
                        <select name="age_group" class="mt-1 w-full bg-gray-700 rounded px-3 py-2">
                            <option>Under 25</option><option>25-35</option><option>36-50</option><option>51-65</option><option>65+</option>
                        </select></label>
                    <label class="block"><span class="text-sm text-gray-400">Tenure Group</span>
                        <select name="tenure_group" class="mt-1 w-full bg-gray-700 rounded px-3 py-2">
                            <option>&lt; 1 Year</option><option>1-2 Years</option><option>2-3 Years</option><option>3+ Years</option>
                        </select></label>
                </div>
            </div>
            <button type="submit" class="mt-6 w-full bg-blue-600 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded">
                Predict Churn
            </button>
        </form>

        <div id="result" class="hidden mt-6 rounded-lg p-6 font-semibold"></div>
    </div>

    <script>
        const NUMERIC_FIELDS = [
            'age', 'tenure', 'usage_frequency', 'support_calls', 'payment_delay',
            'total_spend', 'last_interaction', 'lifetime_value', 'monthly_spend',
            'usage_intensity', 'support_call_rate', 'interaction_ratio', 'delay_ratio'
        ];

        document.getElementById('churn-form').addEventListener('submit', async (e) => {
            e.preventDefault();

            const form = new FormData(e.target);
            const record = {};
            for (const [name, value] of form.entries()) {
                record[name] = NUMERIC_FIELDS.includes(name) ? parseFloat(value) : value;
            }

            const result = document.getElementById('result');
            try {
                const response = await fetch('/api/predict', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(record)
                });
                const body = await response.json();

                result.classList.remove('hidden', 'bg-red-900', 'bg-green-900', 'bg-yellow-900');
                if (!response.ok) {
                    result.classList.add('bg-yellow-900');
                    result.textContent = body.error || 'Prediction failed';
                } else if (body.label === 'churn') {
                    result.classList.add('bg-red-900');
                    result.textContent = body.message;
                } else {
                    result.classList.add('bg-green-900');
                    result.textContent = body.message;
                }
            } catch (err) {
                result.classList.remove('hidden');
                result.classList.add('bg-yellow-900');
                result.textContent = 'Request failed: ' + err.message;
            }
        });
    </script>
</body>
</html>
"#;
