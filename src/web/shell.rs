pub const MAP_SHELL_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>NetAtlas</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css" />
  <link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css" />
  <style>
    html, body { height: 100%; margin: 0; font-family: system-ui, sans-serif; }
    #map { position: absolute; inset: 0; }
    #controls {
      position: absolute; top: 10px; right: 10px; z-index: 1000;
      background: #fff; padding: 10px 12px; border-radius: 6px;
      box-shadow: 0 1px 5px rgba(0, 0, 0, 0.4);
      display: flex; gap: 8px; align-items: center;
    }
    #controls input, #controls select { padding: 4px 6px; }
    #status { font-size: 12px; color: #666; min-width: 80px; }
    #status.error { color: #c0392b; }
  </style>
</head>
<body>
  <div id="map"></div>
  <div id="controls">
    <input id="search" type="text" placeholder="Search labels..." />
    <select id="type-filter"><option value="all">All types</option></select>
    <span id="status"></span>
  </div>

  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <script src="https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js"></script>
  <script>
    const map = L.map('map').setView([50.85, 4.35], 7);
    L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
      maxZoom: 19,
      attribution: '&copy; OpenStreetMap contributors'
    }).addTo(map);

    const status = document.getElementById('status');
    let activeLayers = [];

    function showStatus(text, isError) {
      status.textContent = text;
      status.className = isError ? 'error' : '';
    }

    // Replace the whole display with a scene from the server.
    function applyScene(scene) {
      activeLayers.forEach((layer) => map.removeLayer(layer));
      activeLayers = [];

      let markers = 0;
      scene.layers.forEach((layer) => {
        if (layer.kind === 'cluster') {
          const group = L.markerClusterGroup({
            spiderfyOnMaxZoom: true,
            showCoverageOnHover: false
          });
          layer.markers.forEach((m) => {
            markers += 1;
            group.addLayer(
              L.circleMarker([m.position.lat, m.position.lng], m.style).bindPopup(m.popup)
            );
          });
          map.addLayer(group);
          activeLayers.push(group);
        } else if (layer.kind === 'path') {
          const path = L.polyline(
            layer.path.map((p) => [p.lat, p.lng]),
            layer.style
          ).bindPopup(layer.popup);
          map.addLayer(path);
          activeLayers.push(path);
        }
      });

      if (scene.fit) {
        map.fitBounds(
          [
            [scene.fit.bounds.southWest.lat, scene.fit.bounds.southWest.lng],
            [scene.fit.bounds.northEast.lat, scene.fit.bounds.northEast.lng]
          ],
          { padding: [scene.fit.paddingPx, scene.fit.paddingPx] }
        );
      }
      showStatus(markers + ' markers', false);
    }

    async function refresh() {
      const params = new URLSearchParams({
        search: document.getElementById('search').value,
        type: document.getElementById('type-filter').value
      });
      const res = await fetch('/api/v1/scene?' + params);
      if (!res.ok) {
        showStatus(await res.text(), true);
        return;
      }
      applyScene(await res.json());
    }

    async function loadTypes() {
      const res = await fetch('/api/v1/types');
      if (!res.ok) return;
      const select = document.getElementById('type-filter');
      (await res.json()).forEach((t) => {
        const option = document.createElement('option');
        option.value = t;
        option.textContent = t;
        select.appendChild(option);
      });
    }

    document.getElementById('search').addEventListener('change', refresh);
    document.getElementById('search').addEventListener('keyup', (e) => {
      if (e.key === 'Enter') refresh();
    });
    document.getElementById('type-filter').addEventListener('change', refresh);

    loadTypes().then(refresh);
  </script>
</body>
</html>
"#;
