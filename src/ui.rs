use crate::models::{ViewMode, ViewSnapshot};

pub fn render_index(snapshot: &ViewSnapshot) -> String {
    let counts = &snapshot.stats.counts;
    INDEX_HTML
        .replace("{{MODE}}", mode_key(snapshot.mode))
        .replace("{{TOTAL}}", &snapshot.stats.total_reviews.to_string())
        .replace("{{POSITIVE}}", &counts.positive.to_string())
        .replace("{{NEGATIVE}}", &counts.negative.to_string())
        .replace("{{NEUTRAL}}", &counts.neutral.to_string())
}

fn mode_key(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Single => "single",
        ViewMode::Bulk => "bulk",
        ViewMode::Insights => "insights",
        ViewMode::Analytics => "analytics",
    }
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sentiment Dashboard</title>
  <style>
    :root {
      --bg-1: #1e1b4b;
      --bg-2: #1e3a8a;
      --ink: #e0f2fe;
      --muted: #93c5fd;
      --card: rgba(255, 255, 255, 0.08);
      --border: rgba(255, 255, 255, 0.18);
      --positive: #10b981;
      --negative: #ef4444;
      --neutral: #f59e0b;
      --accent: #06b6d4;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #581c87, var(--bg-2) 55%, var(--bg-1));
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1100px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header {
      text-align: center;
    }

    h1 {
      margin: 0 0 6px;
      font-size: clamp(2rem, 4vw, 2.8rem);
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .card,
    .stat {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 18px;
      padding: 18px;
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      font-size: 1.7rem;
      font-weight: 600;
    }

    .value.positive { color: var(--positive); }
    .value.negative { color: var(--negative); }
    .value.neutral { color: var(--neutral); }

    .tabs {
      display: flex;
      justify-content: center;
      flex-wrap: wrap;
      gap: 10px;
    }

    button,
    .export {
      appearance: none;
      border: none;
      border-radius: 12px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
      background: rgba(255, 255, 255, 0.12);
      text-decoration: none;
    }

    .tab.active,
    .primary {
      background: linear-gradient(90deg, var(--accent), #3b82f6);
    }

    button:disabled {
      opacity: 0.6;
      cursor: progress;
    }

    textarea {
      width: 100%;
      min-height: 130px;
      padding: 14px;
      border-radius: 12px;
      border: 2px solid rgba(6, 182, 212, 0.3);
      background: rgba(255, 255, 255, 0.05);
      color: white;
      font: inherit;
      resize: vertical;
    }

    .view {
      display: none;
      gap: 18px;
    }

    .view.active {
      display: grid;
    }

    .grid-2 {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 18px;
    }

    .banner {
      display: none;
      padding: 12px 16px;
      border-radius: 12px;
      background: rgba(239, 68, 68, 0.2);
      border: 1px solid rgba(239, 68, 68, 0.5);
    }

    .banner.visible {
      display: block;
    }

    .bar-row {
      display: grid;
      grid-template-columns: 90px 1fr 48px;
      align-items: center;
      gap: 10px;
      margin: 8px 0;
    }

    .bar-track {
      height: 10px;
      border-radius: 999px;
      background: rgba(255, 255, 255, 0.1);
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
    }

    svg {
      width: 100%;
      height: 240px;
      display: block;
    }

    svg text {
      fill: var(--muted);
      font-size: 11px;
    }

    .recent li {
      list-style: none;
      padding: 10px 0;
      border-bottom: 1px solid var(--border);
    }

    .recent {
      margin: 0;
      padding: 0;
    }

    .empty {
      color: var(--muted);
      text-align: center;
    }
  </style>
</head>
<body>
  <main class="app" data-mode="{{MODE}}">
    <header>
      <h1>Sentiment Dashboard</h1>
      <p class="subtitle">Customer review analysis backed by a remote classifier.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Reviews analyzed</span>
        <span id="total" class="value">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Positive</span>
        <span id="count-positive" class="value positive">{{POSITIVE}}</span>
      </div>
      <div class="stat">
        <span class="label">Negative</span>
        <span id="count-negative" class="value negative">{{NEGATIVE}}</span>
      </div>
      <div class="stat">
        <span class="label">Neutral</span>
        <span id="count-neutral" class="value neutral">{{NEUTRAL}}</span>
      </div>
    </section>

    <nav class="tabs" role="tablist">
      <button class="tab" type="button" data-tab="single" role="tab">Single</button>
      <button class="tab" type="button" data-tab="bulk" role="tab">Bulk</button>
      <button class="tab" type="button" data-tab="insights" role="tab">Insights</button>
      <button class="tab" type="button" data-tab="analytics" role="tab">Analytics</button>
      <a class="export" href="/api/export" download>Export report</a>
    </nav>

    <div id="banner" class="banner" role="alert"></div>

    <section class="view" data-view="single">
      <form id="single-form" class="card">
        <textarea id="review-input" placeholder="Enter customer review here..."></textarea>
        <p><button class="primary" id="single-btn" type="submit">Analyze sentiment</button></p>
      </form>
      <div id="current" class="grid-2"></div>
    </section>

    <section class="view" data-view="bulk">
      <form id="bulk-form" class="card">
        <textarea id="bulk-input" placeholder="One review per line..."></textarea>
        <p><button class="primary" id="bulk-btn" type="submit">Analyze all</button></p>
      </form>
    </section>

    <section class="view" data-view="insights">
      <div class="grid-2">
        <div class="card"><h3>Sentiment counts</h3><svg id="counts-chart" viewBox="0 0 420 240"></svg></div>
        <div class="card"><h3>Confidence distribution</h3><svg id="confidence-chart" viewBox="0 0 420 240"></svg></div>
      </div>
      <div class="card" id="insights"></div>
    </section>

    <section class="view" data-view="analytics">
      <div class="grid-2">
        <div class="card"><h3>Trend (last 10)</h3><svg id="trend-chart" viewBox="0 0 420 240"></svg></div>
        <div class="card"><h3>Average profile</h3><svg id="radar-chart" viewBox="0 0 420 240"></svg></div>
      </div>
    </section>

    <section class="card">
      <h3>Recent activity</h3>
      <ul id="recent" class="recent"></ul>
    </section>
  </main>

  <script>
    const COLORS = { Positive: '#10b981', Negative: '#ef4444', Neutral: '#f59e0b' };
    const appEl = document.querySelector('.app');
    const bannerEl = document.getElementById('banner');
    const reviewInput = document.getElementById('review-input');
    const bulkInput = document.getElementById('bulk-input');
    const singleBtn = document.getElementById('single-btn');
    const bulkBtn = document.getElementById('bulk-btn');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const views = Array.from(document.querySelectorAll('.view'));

    const el = (tag, attrs = {}, text) => {
      const node = document.createElement(tag);
      Object.entries(attrs).forEach(([key, value]) => node.setAttribute(key, value));
      if (text !== undefined) {
        node.textContent = text;
      }
      return node;
    };

    const svgEl = (tag, attrs = {}, text) => {
      const node = document.createElementNS('http://www.w3.org/2000/svg', tag);
      Object.entries(attrs).forEach(([key, value]) => node.setAttribute(key, value));
      if (text !== undefined) {
        node.textContent = text;
      }
      return node;
    };

    const clear = (node) => {
      while (node.firstChild) {
        node.removeChild(node.firstChild);
      }
    };

    const emptyChart = (svg) => {
      clear(svg);
      svg.appendChild(svgEl('text', { x: '50%', y: '50%', 'text-anchor': 'middle' }, 'No data yet'));
    };

    const renderBars = (svg, items) => {
      clear(svg);
      const max = Math.max(1, ...items.map((item) => item.value));
      const slot = 380 / items.length;
      items.forEach((item, index) => {
        const height = (item.value / max) * 180;
        const x = 30 + index * slot;
        svg.appendChild(svgEl('rect', {
          x: x + slot * 0.15, y: 200 - height, width: slot * 0.7, height,
          rx: 6, fill: item.color || '#06b6d4'
        }));
        svg.appendChild(svgEl('text', { x: x + slot / 2, y: 220, 'text-anchor': 'middle' }, item.label));
        svg.appendChild(svgEl('text', { x: x + slot / 2, y: 194 - height, 'text-anchor': 'middle' }, String(item.value)));
      });
    };

    const renderTrend = (svg, points) => {
      if (!points.length) {
        emptyChart(svg);
        return;
      }
      clear(svg);
      const step = points.length > 1 ? 360 / (points.length - 1) : 0;
      const x = (index) => 30 + index * step;
      const y = (value) => 200 - value * 1.8;
      ['positive', 'negative', 'neutral'].forEach((key) => {
        const label = key.charAt(0).toUpperCase() + key.slice(1);
        const path = points
          .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index)} ${y(point[key])}`)
          .join(' ');
        svg.appendChild(svgEl('path', { d: path, fill: 'none', stroke: COLORS[label], 'stroke-width': 3 }));
      });
      points.forEach((point, index) => {
        svg.appendChild(svgEl('text', { x: x(index), y: 220, 'text-anchor': 'middle' }, String(point.index)));
      });
    };

    const renderRadar = (svg, radar) => {
      if (!radar) {
        emptyChart(svg);
        return;
      }
      clear(svg);
      const axes = [
        ['Positive', radar.positive, -Math.PI / 2],
        ['Negative', radar.negative, Math.PI / 6],
        ['Neutral', radar.neutral, (5 * Math.PI) / 6]
      ];
      const cx = 210;
      const cy = 125;
      const r = 95;
      const outline = axes.map(([, , angle]) => `${cx + r * Math.cos(angle)},${cy + r * Math.sin(angle)}`).join(' ');
      svg.appendChild(svgEl('polygon', { points: outline, fill: 'none', stroke: 'rgba(255,255,255,0.25)' }));
      const shape = axes
        .map(([, value, angle]) => `${cx + (r * value / 100) * Math.cos(angle)},${cy + (r * value / 100) * Math.sin(angle)}`)
        .join(' ');
      svg.appendChild(svgEl('polygon', { points: shape, fill: 'rgba(6,182,212,0.45)', stroke: '#06b6d4' }));
      axes.forEach(([label, value, angle]) => {
        svg.appendChild(svgEl('text', {
          x: cx + (r + 14) * Math.cos(angle), y: cy + (r + 14) * Math.sin(angle), 'text-anchor': 'middle'
        }, `${label} ${value}%`));
      });
    };

    const probabilityRow = (slice) => {
      const row = el('div', { class: 'bar-row' });
      row.appendChild(el('span', {}, slice.name));
      const track = el('div', { class: 'bar-track' });
      track.appendChild(el('div', {
        class: 'bar-fill',
        style: `width:${slice.value * 100}%;background:${COLORS[slice.name]}`
      }));
      row.appendChild(track);
      row.appendChild(el('span', {}, `${Math.round(slice.value * 100)}%`));
      return row;
    };

    const renderCurrent = (current) => {
      const container = document.getElementById('current');
      clear(container);
      if (!current) {
        return;
      }
      const summary = el('div', { class: 'card' });
      summary.appendChild(el('h3', {}, current.record.label));
      summary.appendChild(el('p', {}, `Confidence ${current.confidence.toFixed(2)}`));
      summary.appendChild(el('p', {}, current.record.timestamp));
      summary.appendChild(el('p', {}, `"${current.record.review}"`));
      const breakdown = el('div', { class: 'card' });
      breakdown.appendChild(el('h3', {}, 'Probabilities'));
      current.breakdown.forEach((slice) => breakdown.appendChild(probabilityRow(slice)));
      container.appendChild(summary);
      container.appendChild(breakdown);
    };

    const renderInsights = (insights) => {
      const container = document.getElementById('insights');
      clear(container);
      if (!insights) {
        container.appendChild(el('p', { class: 'empty' }, 'No reviews analyzed yet.'));
        return;
      }
      container.appendChild(el('h3', {}, 'Key insights'));
      const list = el('ul');
      list.appendChild(el('li', {}, `Customer satisfaction: ${insights.satisfaction_percent}%`));
      list.appendChild(el('li', {}, `Total analyzed: ${insights.total}`));
      list.appendChild(el('li', {}, `Focus: ${insights.focus}`));
      container.appendChild(list);
    };

    const renderRecent = (records) => {
      const list = document.getElementById('recent');
      clear(list);
      if (!records.length) {
        list.appendChild(el('li', { class: 'empty' }, 'No activity yet'));
        return;
      }
      records.forEach((record) => {
        const item = el('li');
        item.appendChild(el('strong', { style: `color:${COLORS[record.label]}` }, record.label));
        item.appendChild(el('span', {}, ` ${record.review} `));
        item.appendChild(el('small', {},
          `+${Math.round(record.positive * 100)}% -${Math.round(record.negative * 100)}% ~${Math.round(record.neutral * 100)}%`));
        list.appendChild(item);
      });
    };

    const render = (snapshot) => {
      const stats = snapshot.stats;
      appEl.dataset.mode = snapshot.mode;
      tabs.forEach((button) => {
        const active = button.dataset.tab === snapshot.mode;
        button.classList.toggle('active', active);
        button.setAttribute('aria-selected', String(active));
      });
      views.forEach((view) => view.classList.toggle('active', view.dataset.view === snapshot.mode));

      bannerEl.textContent = snapshot.error || '';
      bannerEl.classList.toggle('visible', Boolean(snapshot.error));
      singleBtn.disabled = snapshot.loading;
      bulkBtn.disabled = snapshot.loading;
      reviewInput.value = snapshot.review_input;
      bulkInput.value = snapshot.bulk_input;

      document.getElementById('total').textContent = stats.total_reviews;
      document.getElementById('count-positive').textContent = stats.counts.Positive;
      document.getElementById('count-negative').textContent = stats.counts.Negative;
      document.getElementById('count-neutral').textContent = stats.counts.Neutral;

      renderCurrent(snapshot.current);
      renderInsights(stats.insights);
      renderRecent(stats.recent);

      const countsChart = document.getElementById('counts-chart');
      const confidenceChart = document.getElementById('confidence-chart');
      if (stats.total_reviews === 0) {
        emptyChart(countsChart);
        emptyChart(confidenceChart);
      } else {
        renderBars(countsChart, stats.breakdown.map((item) => ({
          label: item.name, value: item.count, color: COLORS[item.name]
        })));
        renderBars(confidenceChart, stats.confidence.map((bucket) => ({
          label: bucket.range, value: bucket.count
        })));
      }
      renderTrend(document.getElementById('trend-chart'), stats.trend);
      renderRadar(document.getElementById('radar-chart'), stats.radar);
    };

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      render(await res.json());
    };

    const showError = (err) => {
      bannerEl.textContent = err.message;
      bannerEl.classList.add('visible');
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => post('/api/tab', { tab: button.dataset.tab }).catch(showError));
    });

    document.getElementById('single-form').addEventListener('submit', (event) => {
      event.preventDefault();
      singleBtn.disabled = true;
      post('/api/analyze', { review: reviewInput.value }).catch(showError);
    });

    document.getElementById('bulk-form').addEventListener('submit', (event) => {
      event.preventDefault();
      bulkBtn.disabled = true;
      post('/api/bulk', { reviews: bulkInput.value }).catch(showError);
    });

    fetch('/api/state')
      .then((res) => res.json())
      .then(render)
      .catch(showError);
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ViewState;

    #[test]
    fn index_fills_placeholders() {
        let html = render_index(&ViewState::default().snapshot());
        assert!(html.contains(r#"data-mode="single""#));
        assert!(html.contains(r#"<span id="total" class="value">0</span>"#));
        assert!(!html.contains("{{"));
    }
}
