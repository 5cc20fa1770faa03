//! Inline HTML rendering for the submission form and the weather view.

use crate::domain::WeatherSnapshot;

/// Cities offered in the submission form, as (label, "lat,lon") pairs.
pub const CITY_CHOICES: [(&str, &str); 5] = [
    ("New York", "40.7128,-74.0060"),
    ("London", "51.5074,-0.1278"),
    ("Tokyo", "35.6762,139.6503"),
    ("Sydney", "-33.8688,151.2093"),
    ("Cape Town", "-33.9249,18.4241"),
];

/// Renders the coordinate submission form.
#[must_use]
pub fn form_page() -> String {
    let options: String = CITY_CHOICES
        .iter()
        .map(|(label, coords)| format!("        <option value=\"{coords}\">{label}</option>\n"))
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <title>climatrack</title>\n\
         </head>\n\
         <body>\n\
           <h1>Weather Lookup</h1>\n\
           <form action=\"/get_weather\" method=\"post\">\n\
             <label for=\"city\">City</label>\n\
             <select id=\"city\" name=\"city\">\n\
        {options}\
             </select>\n\
             <button type=\"submit\">Get Weather</button>\n\
           </form>\n\
         </body>\n\
         </html>\n"
    )
}

/// Renders the stored snapshot as a metric table.
#[must_use]
pub fn weather_page(snapshot: &WeatherSnapshot) -> String {
    let m = &snapshot.metrics;
    let rows = [
        ("Temperature", m.temperature, "°C"),
        ("Feels like", m.temperature_apparent, "°C"),
        ("Dew point", m.dew_point, "°C"),
        ("Humidity", m.humidity, "%"),
        ("Wind speed", m.wind_speed, "m/s"),
        ("Wind direction", m.wind_direction, "°"),
        ("Wind gust", m.wind_gust, "m/s"),
        ("Surface pressure", m.pressure_surface_level, "hPa"),
        ("Precipitation probability", m.precipitation_probability, "%"),
        ("Cloud cover", m.cloud_cover, "%"),
        ("Visibility", m.visibility, "km"),
    ];
    let table_rows: String = rows
        .iter()
        .map(|(label, value, unit)| {
            format!("      <tr><th>{label}</th><td>{value} {unit}</td></tr>\n")
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <title>climatrack: {city}</title>\n\
         </head>\n\
         <body>\n\
           <h1>Weather for {city}</h1>\n\
           <p>Recorded at {recorded_at}</p>\n\
           <table>\n\
        {table_rows}\
           </table>\n\
           <p><a href=\"/\">Look up another city</a></p>\n\
         </body>\n\
         </html>\n",
        city = snapshot.city,
        recorded_at = snapshot.recorded_at.to_rfc3339(),
    )
}
