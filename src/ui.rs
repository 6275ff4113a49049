use crate::models::{
    AdherenceFlags, CheckIn, DashboardResponse, HistoryPoint, Phase, SymptomRatings,
};
use crate::scoring::daily_score;

const SPARK_WIDTH: f64 = 240.0;
const SPARK_HEIGHT: f64 = 56.0;
const SPARK_PAD: f64 = 6.0;

/// Renders the single page. `today` prefills the form when already submitted.
pub fn render_index(
    dashboard: &DashboardResponse,
    history: &[HistoryPoint],
    today: Option<&CheckIn>,
) -> String {
    let draft = today.cloned().unwrap_or_else(|| CheckIn {
        date: dashboard.today.clone(),
        symptoms: SymptomRatings::default(),
        adherence: AdherenceFlags::default(),
    });

    INDEX_HTML
        .replace("{{DAY}}", &dashboard.day_index.to_string())
        .replace("{{CHECKIN_HINT}}", checkin_hint(dashboard.has_today))
        .replace("{{SLIDERS}}", &sliders(&draft.symptoms))
        .replace("{{TOGGLES}}", &toggles(&draft.adherence))
        .replace("{{PREVIEW}}", &daily_score(&draft).to_string())
        .replace("{{BASELINE}}", &baseline_label(dashboard))
        .replace("{{ROLLING}}", &dashboard.rolling_average.to_string())
        .replace("{{IMPROVEMENT}}", &improvement_label(dashboard))
        .replace("{{STATUS}}", status_label(dashboard.has_today))
        .replace("{{SPARK_POINTS}}", &sparkline_points(&dashboard.trend))
        .replace("{{SPARK_MID}}", &format_coord(scale_y(50.0, 0.0, 100.0)))
        .replace("{{HISTORY}}", &history_rows(history))
}

fn checkin_hint(has_today: bool) -> &'static str {
    if has_today {
        "You already submitted today. Adjust and resubmit to see how the score changes."
    } else {
        "Thirty seconds. Your inputs update a deterministic score."
    }
}

fn status_label(has_today: bool) -> &'static str {
    if has_today { "Check-in saved" } else { "No check-in yet" }
}

fn baseline_label(dashboard: &DashboardResponse) -> String {
    if dashboard.baseline_average > 0 {
        format!("{}/100", dashboard.baseline_average)
    } else {
        "—".to_string()
    }
}

// A zero baseline means "not enough days yet", never "no change".
fn improvement_label(dashboard: &DashboardResponse) -> String {
    if dashboard.baseline_average == 0 {
        return "Baseline not ready yet (needs 7 days).".to_string();
    }
    format!(
        "{:+}% vs baseline ({}/100)",
        dashboard.improvement_percentage, dashboard.baseline_average
    )
}

fn sliders(symptoms: &SymptomRatings) -> String {
    [
        ("energy", "Energy", symptoms.energy),
        ("mood", "Mood", symptoms.mood),
        ("sleep", "Sleep quality", symptoms.sleep),
        ("focus", "Focus / productivity", symptoms.focus),
        ("digestion", "Digestive comfort", symptoms.digestion),
    ]
    .iter()
    .map(|(name, label, value)| {
        format!(
            r#"<label class="row"><span>{label}</span><input type="range" name="{name}" min="1" max="5" value="{}" /></label>"#,
            (*value).clamp(1, 5)
        )
    })
    .collect::<Vec<_>>()
    .join("\n")
}

fn toggles(adherence: &AdherenceFlags) -> String {
    [
        ("took_supplements", "Took supplements", adherence.took_supplements),
        ("followed_diet", "Ate as recommended", adherence.followed_diet),
        ("followed_routines", "Followed morning/evening routines", adherence.followed_routines),
    ]
    .iter()
    .map(|(name, label, checked)| {
        let checked = if *checked { " checked" } else { "" };
        format!(
            r#"<label class="row"><span>{label}</span><input type="checkbox" name="{name}"{checked} /></label>"#
        )
    })
    .collect::<Vec<_>>()
    .join("\n")
}

fn history_rows(history: &[HistoryPoint]) -> String {
    if history.is_empty() {
        return r#"<li class="empty">No check-ins yet.</li>"#.to_string();
    }
    history
        .iter()
        .map(|row| {
            let today = if row.is_today { " (Today)" } else { "" };
            let phase = match row.phase {
                Phase::Baseline => "Baseline week",
                Phase::PostBaseline => "Post-baseline",
            };
            format!(
                r#"<li><div><strong>{}{today}</strong><small>{phase}</small></div><span>{}/100</span></li>"#,
                row.pretty_date, row.daily_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// SVG polyline points for the trend, on a fixed 0..100 vertical scale that
/// widens if a value ever falls outside it.
pub fn sparkline_points(values: &[u8]) -> String {
    let values: Vec<f64> = if values.is_empty() {
        vec![0.0]
    } else {
        values.iter().map(|&v| f64::from(v)).collect()
    };
    let min = values.iter().copied().fold(0.0, f64::min);
    let max = values.iter().copied().fold(100.0, f64::max);
    let step = (SPARK_WIDTH - SPARK_PAD * 2.0) / (values.len().saturating_sub(1).max(1) as f64);

    values
        .iter()
        .enumerate()
        .map(|(idx, &v)| {
            let x = SPARK_PAD + idx as f64 * step;
            format!("{},{}", format_coord(x), format_coord(scale_y(v, min, max)))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn scale_y(value: f64, min: f64, max: f64) -> f64 {
    let t = (value - min) / (max - min).max(1.0);
    SPARK_HEIGHT - SPARK_PAD - t * (SPARK_HEIGHT - SPARK_PAD * 2.0)
}

fn format_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    rounded.to_string()
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Progress Score</title>
  <style>
    :root {
      --bg: #f6f5f2;
      --ink: #1f1f1e;
      --muted: #75716b;
      --card: #ffffff;
      --border: rgba(31, 31, 30, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: 1.6rem;
    }

    .pill {
      display: inline-block;
      border: 1px solid var(--border);
      border-radius: 999px;
      padding: 2px 10px;
      font-size: 0.8rem;
      margin-right: 6px;
      color: var(--muted);
    }

    section {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 18px;
      padding: 20px;
      display: grid;
      gap: 12px;
    }

    .row {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    .stat {
      font-size: 2.4rem;
      font-weight: 600;
    }

    .muted {
      color: var(--muted);
      font-size: 0.9rem;
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
    }

    li {
      display: flex;
      justify-content: space-between;
      padding: 10px 0;
      border-bottom: 1px solid var(--border);
    }

    li small {
      display: block;
      color: var(--muted);
    }

    button {
      border: none;
      border-radius: 12px;
      padding: 10px 16px;
      font-weight: 600;
      background: var(--ink);
      color: white;
      cursor: pointer;
    }

    button.secondary {
      background: white;
      color: var(--ink);
      border: 1px solid var(--border);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Progress Score</h1>
        <span class="pill">Day {{DAY}}</span>
        <span class="pill">Baseline: Days 1–7</span>
        <span class="pill">Rolling: last 7 days</span>
      </div>
      <form method="post" action="/reset">
        <button class="secondary" type="submit">Reset demo</button>
      </form>
    </header>

    <section>
      <h2>Today’s Check-in</h2>
      <p class="muted">{{CHECKIN_HINT}}</p>
      <form id="checkin" method="post" action="/checkin">
        {{SLIDERS}}
        <h3>Protocol adherence</h3>
        {{TOGGLES}}
        <div class="row">
          <div>
            <div>Today’s score: <span id="preview">{{PREVIEW}}</span>/100</div>
            <div class="muted">Baseline week average: {{BASELINE}}</div>
          </div>
          <button type="submit">Save check-in</button>
        </div>
      </form>
    </section>

    <section>
      <h2>Dashboard</h2>
      <div class="row">
        <div>
          <div class="muted">Progress Score (rolling 7-day)</div>
          <div class="stat">{{ROLLING}}/100</div>
          <div class="muted">{{IMPROVEMENT}}</div>
        </div>
        <div>
          <div class="muted">Status</div>
          <div>{{STATUS}}</div>
        </div>
      </div>
      <div class="muted">Trend (last 14 days)</div>
      <svg width="100%" viewBox="0 0 240 56">
        <polyline fill="none" stroke="currentColor" stroke-width="2.5" points="{{SPARK_POINTS}}" />
        <line x1="6" y1="{{SPARK_MID}}" x2="234" y2="{{SPARK_MID}}" stroke="#75716b" stroke-width="1" opacity="0.25" />
      </svg>
    </section>

    <section>
      <h2>History</h2>
      <ul>
        {{HISTORY}}
      </ul>
    </section>
  </main>
  <script>
    const form = document.getElementById('checkin');
    const preview = document.getElementById('preview');
    const ratings = ['energy', 'mood', 'sleep', 'focus', 'digestion'];
    const flags = ['took_supplements', 'followed_diet', 'followed_routines'];

    const draft = () => ({
      symptoms: Object.fromEntries(
        ratings.map((name) => [name, Number(form.elements[name].value)])
      ),
      adherence: Object.fromEntries(
        flags.map((name) => [name, form.elements[name].checked])
      )
    });

    const updatePreview = async () => {
      const res = await fetch('/api/preview', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(draft())
      });
      if (!res.ok) {
        return;
      }
      const data = await res.json();
      preview.textContent = String(data.daily_score);
    };

    form.addEventListener('input', () => {
      updatePreview().catch(() => {});
    });
    form.addEventListener('change', () => {
      updatePreview().catch(() => {});
    });
  </script>
</body>
</html>
"##;
