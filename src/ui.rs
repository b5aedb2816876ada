use crate::models::Theme;

pub fn render_index(today: &str, theme: Theme) -> String {
    let (body_class, icon) = match theme {
        Theme::Dark => ("dark-mode", "☀️"),
        Theme::Light => ("", "🌙"),
    };
    INDEX_HTML
        .replace("{{TODAY}}", today)
        .replace("{{BODY_CLASS}}", body_class)
        .replace("{{THEME_ICON}}", icon)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Attendance Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #6b645d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --panel: white;
      --line: rgba(47, 72, 88, 0.08);
      --low: #c63b2b;
      --high: #2d7a4b;
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    body.dark-mode {
      --bg-1: #1b1f24;
      --bg-2: #2f4858;
      --ink: #eee8df;
      --muted: #b3aca3;
      --card: rgba(30, 34, 40, 0.9);
      --panel: #252a31;
      --line: rgba(238, 232, 223, 0.1);
      --low: #ff8a7a;
      --high: #7fd39b;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-1) 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
    }

    form.register {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
      background: var(--panel);
      border: 1px solid var(--line);
      border-radius: 20px;
      padding: 20px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    input[type="text"],
    input[type="number"],
    input[type="date"] {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid var(--line);
      background: transparent;
      color: var(--ink);
    }

    fieldset {
      grid-column: 1 / -1;
      border: none;
      padding: 0;
      margin: 0;
      display: flex;
      flex-wrap: wrap;
      gap: 10px 16px;
    }

    fieldset label {
      display: inline-flex;
      align-items: center;
      gap: 6px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.icon {
      background: transparent;
      padding: 4px 6px;
    }

    button.ghost {
      background: transparent;
      color: var(--accent-2);
      border: 1px solid var(--line);
      padding: 6px 12px;
    }

    body.dark-mode button.ghost {
      color: var(--ink);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: var(--panel);
      border-radius: 20px;
      overflow: hidden;
    }

    th,
    td {
      padding: 10px 12px;
      text-align: left;
      border-bottom: 1px solid var(--line);
    }

    th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .low {
      color: var(--low);
      font-weight: 600;
    }

    .high {
      color: var(--high);
      font-weight: 600;
    }

    .details p {
      margin: 6px 0;
    }

    .chart-card {
      background: var(--panel);
      border-radius: 20px;
      padding: 16px;
      border: 1px solid var(--line);
    }

    #chart {
      width: 100%;
      height: 300px;
      display: block;
    }

    .chart-grid {
      stroke: var(--line);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .bar-attended {
      fill: rgba(54, 162, 235, 0.7);
    }

    .bar-passed {
      fill: rgba(255, 206, 86, 0.7);
    }

    .bar-total {
      fill: rgba(255, 99, 132, 0.7);
    }

    .legend {
      display: flex;
      gap: 16px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 10px;
      height: 10px;
      margin-right: 6px;
      border-radius: 3px;
      background: currentColor;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--low);
    }

    .status[data-type="ok"] {
      color: var(--high);
    }

    @media (max-width: 700px) {
      .app {
        padding: 28px 18px;
      }
      table {
        font-size: 0.85rem;
      }
    }
  </style>
</head>
<body class="{{BODY_CLASS}}">
  <main class="app">
    <header>
      <div>
        <h1>Attendance Tracker</h1>
        <p class="subtitle">Today is <b id="today">{{TODAY}}</b>. Keep every subject above 75%.</p>
      </div>
      <button id="toggleDarkMode" class="ghost" type="button" aria-label="Toggle dark mode">{{THEME_ICON}}</button>
    </header>

    <form id="addSubjectForm" class="register">
      <label>Subject
        <input type="text" id="subjectName" required />
      </label>
      <label>Attended so far
        <input type="number" id="attended" min="0" value="0" required />
      </label>
      <label>Total classes
        <input type="number" id="totalDays" min="1" required />
      </label>
      <label>Start date
        <input type="date" id="startDate" required />
      </label>
      <fieldset>
        <label><input type="checkbox" name="classDays" value="Monday" />Mon</label>
        <label><input type="checkbox" name="classDays" value="Tuesday" />Tue</label>
        <label><input type="checkbox" name="classDays" value="Wednesday" />Wed</label>
        <label><input type="checkbox" name="classDays" value="Thursday" />Thu</label>
        <label><input type="checkbox" name="classDays" value="Friday" />Fri</label>
        <label><input type="checkbox" name="classDays" value="Saturday" />Sat</label>
        <label><input type="checkbox" name="classDays" value="Sunday" />Sun</label>
      </fieldset>
      <div>
        <button type="submit" id="submitSubject">Add subject</button>
      </div>
    </form>

    <div class="status" id="status"></div>

    <section>
      <table>
        <thead>
          <tr>
            <th>Subject</th>
            <th>Attended</th>
            <th>Total</th>
            <th>Passed</th>
            <th>Net %</th>
            <th>Final %</th>
            <th>Actions</th>
          </tr>
        </thead>
        <tbody id="attendanceTable"></tbody>
      </table>
    </section>

    <section class="chart-card">
      <h2>📊 Attendance Overview by Subject</h2>
      <div class="legend">
        <span style="color: rgba(54, 162, 235, 0.9)">Attended</span>
        <span style="color: rgba(255, 206, 86, 0.9)">Classes Passed</span>
        <span style="color: rgba(255, 99, 132, 0.9)">Total Classes</span>
      </div>
      <svg id="chart" viewBox="0 0 700 300" aria-label="Attendance chart" role="img"></svg>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const tableEl = document.getElementById('attendanceTable');
    const chartEl = document.getElementById('chart');
    const form = document.getElementById('addSubjectForm');
    const submitButton = document.getElementById('submitSubject');
    const themeButton = document.getElementById('toggleDarkMode');
    const today = document.getElementById('today').textContent;

    let subjects = [];
    let editingIndex = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      }[ch]));

    const request = async (method, url, body) => {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['content-type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const percentCell = (value, standing) =>
      `<td class="${standing}">${value.toFixed(1)}%</td>`;

    const renderTable = () => {
      tableEl.innerHTML = '';
      subjects.forEach((view) => {
        const s = view.summary;
        const name = escapeHtml(view.name);
        const row = document.createElement('tr');
        row.innerHTML = `
          <td>${name}</td>
          <td>${s.attended}</td>
          <td>${view.totalDays}</td>
          <td>${s.elapsed}</td>
          ${percentCell(s.realized_percent, s.realized_standing)}
          ${percentCell(s.final_percent, s.final_standing)}
          <td>
            <button class="icon" data-action="attend" aria-label="Mark attendance for ${name}">➕</button>
            <button class="icon" data-action="edit" aria-label="Edit ${name}">✏️</button>
            <button class="icon" data-action="delete" aria-label="Delete ${name}">🗑️</button>
            <button class="icon" data-action="holiday" aria-label="Mark holiday for ${name}">📅</button>
          </td>`;
        row.querySelectorAll('button[data-action]').forEach((button) => {
          button.addEventListener('click', () => handleAction(button.dataset.action, view));
        });
        tableEl.appendChild(row);

        const attended = view.attendedDates.length
          ? view.attendedDates
              .map((d) => `${d} <button class="icon" data-date="${d}" aria-label="Edit attendance for ${name} on ${d}">🖌️</button>`)
              .join(', ')
          : 'None';
        const info = document.createElement('tr');
        info.innerHTML = `
          <td colspan="7">
            <button class="ghost" type="button" aria-expanded="false">Know More</button>
            <div class="details" hidden>
              <p>➕ Need to attend <b>${s.sessions_needed}</b> more of remaining <b>${s.sessions_remaining}</b> classes to hit 75%.</p>
              <p>📅 Holidays: ${view.holidays.join(', ') || 'None'}</p>
              <p>🕒 Class Days: ${view.classDays.join(', ') || 'None'}</p>
              <p>✅ Attended Dates: ${attended}</p>
            </div>
          </td>`;
        const toggle = info.querySelector('button.ghost');
        const details = info.querySelector('.details');
        toggle.addEventListener('click', () => {
          details.hidden = !details.hidden;
          toggle.setAttribute('aria-expanded', String(!details.hidden));
        });
        info.querySelectorAll('button[data-date]').forEach((button) => {
          button.addEventListener('click', () => editAttendance(view, button.dataset.date));
        });
        tableEl.appendChild(info);
      });
    };

    const renderChart = (chart) => {
      if (!chart.bars.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No subjects yet</text>';
        return;
      }

      const width = 700;
      const height = 300;
      const paddingX = 44;
      const paddingY = 40;
      const top = 16;
      const max = chart.suggested_max;
      const scaleY = (height - top - paddingY) / max;
      const y = (value) => height - paddingY - value * scaleY;
      const groupWidth = (width - paddingX * 2) / chart.bars.length;
      const barWidth = Math.min(36, (groupWidth - 16) / 3);

      let grid = '';
      for (let value = 0; value <= max; value += chart.tick_step) {
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${y(value)}" x2="${width - paddingX}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${paddingX - 8}" y="${y(value) + 4}" text-anchor="end">${value}</text>`;
      }

      const bars = chart.bars
        .map((bar, index) => {
          const start = paddingX + index * groupWidth + (groupWidth - barWidth * 3) / 2;
          const rect = (cls, value, offset, title) =>
            `<rect class="${cls}" x="${start + offset * barWidth}" y="${y(value)}" width="${barWidth - 2}" height="${value * scaleY}"><title>${title}: ${value}\nFinal % (if stop now): ${bar.final_percent.toFixed(1)}%</title></rect>`;
          const label = escapeHtml(bar.label);
          return [
            rect('bar-attended', bar.attended, 0, 'Attended'),
            rect('bar-passed', bar.passed, 1, 'Classes Passed'),
            rect('bar-total', bar.total, 2, 'Total Classes'),
            `<text class="chart-label" x="${start + barWidth * 1.5}" y="${height - paddingY + 18}" text-anchor="middle">${label}</text>`
          ].join('');
        })
        .join('');

      chartEl.innerHTML = `${grid}${bars}`;
    };

    const refresh = async () => {
      const [list, chart] = await Promise.all([
        request('GET', '/api/subjects'),
        request('GET', '/api/chart')
      ]);
      subjects = list.subjects;
      renderTable();
      renderChart(chart);
    };

    const run = (promise, message) => {
      promise
        .then(() => {
          setStatus(message, 'ok');
          setTimeout(() => setStatus('', ''), 1500);
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    };

    const handleAction = (action, view) => {
      const base = `/api/subjects/${view.index}`;
      if (action === 'attend') {
        const date = prompt(`Enter attendance date for ${view.name} (YYYY-MM-DD):`, today);
        if (date) run(request('POST', `${base}/attendance`, { date }), 'Attendance saved');
      } else if (action === 'holiday') {
        const date = prompt(`Enter holiday date for ${view.name} (YYYY-MM-DD):`, today);
        if (date) run(request('POST', `${base}/holidays`, { date }), 'Holiday saved');
      } else if (action === 'delete') {
        if (confirm(`Are you sure you want to delete ${view.name}?`)) {
          run(request('DELETE', base), 'Subject deleted');
        }
      } else if (action === 'edit') {
        startEdit(view);
      }
    };

    const editAttendance = (view, oldDate) => {
      if (!confirm(`Remove attendance for ${view.name} on ${oldDate}?`)) {
        return;
      }
      const newDate = prompt(
        `Enter new attendance date for ${view.name} (YYYY-MM-DD, leave blank to only remove):`,
        today
      );
      run(
        request('PUT', `/api/subjects/${view.index}/attendance`, { old_date: oldDate, new_date: newDate || null }),
        'Attendance updated'
      );
    };

    const startEdit = (view) => {
      editingIndex = view.index;
      document.getElementById('subjectName').value = view.name;
      document.getElementById('attended').value = view.attendedDates.length;
      document.getElementById('totalDays').value = view.totalDays;
      document.getElementById('startDate').value = view.startDate;
      document.getElementsByName('classDays').forEach((checkbox) => {
        checkbox.checked = view.classDays.includes(checkbox.value);
      });
      submitButton.textContent = 'Save subject';
      form.scrollIntoView({ behavior: 'smooth' });
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const body = {
        name: document.getElementById('subjectName').value,
        attended: Number.parseInt(document.getElementById('attended').value, 10),
        total_days: Number.parseInt(document.getElementById('totalDays').value, 10),
        start_date: document.getElementById('startDate').value,
        class_days: Array.from(document.getElementsByName('classDays'))
          .filter((checkbox) => checkbox.checked)
          .map((checkbox) => checkbox.value)
      };
      if (Number.isNaN(body.attended) || Number.isNaN(body.total_days)) {
        setStatus('Please enter whole numbers for attended and total classes.', 'error');
        return;
      }
      const pending = editingIndex === null
        ? request('POST', '/api/subjects', body)
        : request('PUT', `/api/subjects/${editingIndex}`, body);
      run(
        pending.then(() => {
          editingIndex = null;
          submitButton.textContent = 'Add subject';
          form.reset();
        }),
        'Subject saved'
      );
    });

    themeButton.addEventListener('click', () => {
      const dark = !document.body.classList.contains('dark-mode');
      request('POST', '/api/theme', { theme: dark ? 'dark' : 'light' })
        .then((res) => {
          const isDark = res.theme === 'dark';
          document.body.classList.toggle('dark-mode', isDark);
          themeButton.textContent = isDark ? '☀️' : '🌙';
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
