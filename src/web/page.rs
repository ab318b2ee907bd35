/// The dashboard page. Self-contained: styling inline, charts via the Plotly
/// CDN, data pulled from /api/dashboard and re-pulled on selector change.
pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Airline Market Demand Dashboard (Live Data)</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
  <style>
    * { box-sizing: border-box; }
    body { margin: 0; font-family: "Segoe UI", Roboto, Helvetica, Arial, sans-serif; background: #f5f7fa; color: #222; }
    .layout { display: flex; min-height: 100vh; }
    aside { width: 260px; flex-shrink: 0; background: #1f2630; color: #e8eaed; padding: 24px 18px; }
    aside h2 { font-size: 1.0em; margin: 0 0 12px 0; letter-spacing: 0.02em; }
    aside label { display: block; font-size: 0.85em; margin-bottom: 6px; color: #aab2bd; }
    aside select { width: 100%; padding: 6px; border-radius: 4px; border: none; }
    main { flex-grow: 1; padding: 24px 32px; max-width: 1200px; }
    h1 { font-size: 1.5em; margin-top: 0; }
    h3 { margin: 28px 0 8px 0; }
    .banner { display: none; padding: 12px 16px; border-radius: 6px; margin: 16px 0; }
    .banner.error { display: block; background: #fdecea; color: #b3261e; }
    .banner.warning { display: block; background: #fef7e0; color: #7a5d00; }
    .banner.info { display: block; background: #e8f0fe; color: #174ea6; }
    details { background: #fff; border: 1px solid #dde3ea; border-radius: 6px; padding: 10px 14px; margin: 16px 0; }
    details summary { cursor: pointer; font-weight: 600; }
    .table-wrap { max-height: 420px; overflow: auto; margin-top: 10px; }
    table { border-collapse: collapse; width: 100%; font-size: 0.8em; }
    th, td { border: 1px solid #dde3ea; padding: 4px 8px; text-align: left; white-space: nowrap; }
    th { position: sticky; top: 0; background: #f0f3f7; }
    .chart { background: #fff; border: 1px solid #dde3ea; border-radius: 6px; min-height: 420px; }
    footer { margin-top: 32px; padding-top: 12px; border-top: 1px solid #dde3ea; font-size: 0.85em; color: #5f6b7a; }
    footer a { color: #174ea6; }
  </style>
</head>
<body>
<div class="layout">
  <aside>
    <h2>Filter Options</h2>
    <label for="country-select">Filter by Origin Country</label>
    <select id="country-select">
      <option value="All">All</option>
    </select>
  </aside>
  <main>
    <h1>Airline Market Demand Dashboard (Live Data)</h1>
    <div id="banner" class="banner"></div>
    <div id="nodata" class="banner"></div>
    <div id="panels" style="display: none;">
      <details>
        <summary>View Raw Data</summary>
        <div class="table-wrap">
          <table id="raw-table"></table>
        </div>
      </details>
      <h3>Top 10 Countries by Active Flights</h3>
      <div id="bar-chart" class="chart"></div>
      <h3>Flight Positions on World Map</h3>
      <div id="geo-chart" class="chart"></div>
    </div>
    <footer>
      Data Source: <a href="https://opensky-network.org/" target="_blank" rel="noopener">OpenSky Network</a>
    </footer>
  </main>
</div>

<script>
  const COLUMNS = [
    'icao24', 'callsign', 'origin_country', 'time_position', 'last_contact',
    'longitude', 'latitude', 'baro_altitude', 'on_ground', 'velocity',
    'true_track', 'vertical_rate', 'sensors', 'geo_altitude', 'squawk',
    'spi', 'position_source'
  ];

  const selectEl = document.getElementById('country-select');
  const bannerEl = document.getElementById('banner');
  const nodataEl = document.getElementById('nodata');
  const panelsEl = document.getElementById('panels');

  selectEl.addEventListener('change', () => loadDashboard(selectEl.value));
  loadDashboard('All');

  function showBanner(kind, text) {
    bannerEl.className = 'banner ' + kind;
    bannerEl.textContent = text;
  }

  function hideBanner() {
    bannerEl.className = 'banner';
    bannerEl.textContent = '';
  }

  function showNoData() {
    nodataEl.className = 'banner warning';
    nodataEl.textContent = 'No data available to display.';
  }

  async function loadDashboard(country) {
    showBanner('info', 'Fetching live flight data...');
    nodataEl.className = 'banner';
    panelsEl.style.display = 'none';

    let data;
    try {
      const resp = await fetch('/api/dashboard?country=' + encodeURIComponent(country));
      data = await resp.json();
    } catch (e) {
      showBanner('error', 'Failed to fetch data from API.');
      showNoData();
      return;
    }

    if (data.error) {
      showBanner('error', data.error);
      showNoData();
      return;
    }

    rebuildSelector(data.countries, data.selected);

    if (data.rows.length === 0) {
      hideBanner();
      showNoData();
      return;
    }

    hideBanner();
    panelsEl.style.display = 'block';
    renderTable(data.rows);
    renderBarChart(data.top_countries);
    renderGeoChart(data.rows);
  }

  function rebuildSelector(countries, selected) {
    const options = ['All'].concat(countries);
    selectEl.innerHTML = '';
    for (const c of options) {
      const opt = document.createElement('option');
      opt.value = c;
      opt.textContent = c;
      selectEl.appendChild(opt);
    }
    selectEl.value = options.includes(selected) ? selected : 'All';
  }

  function cellText(value) {
    if (value === null || value === undefined) return '';
    if (Array.isArray(value)) return value.join(', ');
    return String(value);
  }

  function renderTable(rows) {
    const table = document.getElementById('raw-table');
    table.innerHTML = '';

    const head = table.insertRow();
    for (const col of COLUMNS) {
      const th = document.createElement('th');
      th.textContent = col;
      head.appendChild(th);
    }

    for (const row of rows) {
      const tr = table.insertRow();
      for (const col of COLUMNS) {
        tr.insertCell().textContent = cellText(row[col]);
      }
    }
  }

  function renderBarChart(topCountries) {
    const flights = topCountries.map(c => c.flights);
    const trace = {
      type: 'bar',
      x: topCountries.map(c => c.country),
      y: flights,
      text: flights.map(String),
      textposition: 'auto'
    };
    const layout = {
      title: { text: 'Top 10 Origin Countries (Live Flights)' },
      xaxis: { title: { text: 'Country' } },
      yaxis: { title: { text: 'No. of Active Flights' } },
      margin: { t: 50 }
    };
    Plotly.newPlot('bar-chart', [trace], layout, { responsive: true });
  }

  function renderGeoChart(rows) {
    const byCountry = new Map();
    for (const row of rows) {
      if (!byCountry.has(row.origin_country)) byCountry.set(row.origin_country, []);
      byCountry.get(row.origin_country).push(row);
    }

    const traces = [];
    for (const [country, group] of byCountry) {
      traces.push({
        type: 'scattergeo',
        mode: 'markers',
        name: country,
        lat: group.map(r => r.latitude),
        lon: group.map(r => r.longitude),
        text: group.map(r => r.callsign),
        hoverinfo: 'text',
        marker: { size: 5, opacity: 0.7 }
      });
    }

    const layout = {
      title: { text: 'Live Flight Positions' },
      geo: { projection: { type: 'natural earth' }, showland: true, landcolor: '#e7e8ea' },
      margin: { t: 50 }
    };
    Plotly.newPlot('geo-chart', traces, layout, { responsive: true });
  }
</script>
</body>
</html>
"##;
