use axum::response::Html;
use std::fmt::Write;

use crate::models::Seat;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; }
.row { display: flex; gap: .4rem; margin-bottom: .4rem; align-items: center; }
.row-label { width: 4rem; font-weight: bold; }
.seat { width: 2.2rem; text-align: center; padding: .3rem 0; border-radius: 4px; }
.available { background: #c8f7c5; }
.reserved { background: #f7c5c5; }
.booked { margin: 1rem 0; }";

/// Renders the seat map page. `booked` carries the labels of seats reserved
/// by the request that produced this page, if any.
pub fn index(seats: &[Seat], booked: Option<&[String]>) -> Html<String> {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Train Seat Booking</title>\n");
    let _ = writeln!(page, "<style>\n{}\n</style>", STYLE);
    page.push_str("</head>\n<body>\n<h1>Train Seat Booking</h1>\n");

    page.push_str(
        "<form method=\"post\" action=\"/book\">\n\
         <label for=\"num_seats\">Number of seats</label>\n\
         <input type=\"number\" id=\"num_seats\" name=\"num_seats\" min=\"1\" required>\n\
         <button type=\"submit\">Book</button>\n\
         </form>\n",
    );

    if let Some(labels) = booked {
        page.push_str("<div class=\"booked\">\n<h2>Booked seats</h2>\n<ul>\n");
        for label in labels {
            let _ = writeln!(page, "<li>{}</li>", label);
        }
        page.push_str("</ul>\n</div>\n");
    }

    let available = seats.iter().filter(|s| s.is_available()).count();
    let _ = writeln!(
        page,
        "<p>{} of {} seats available</p>\n<div class=\"car\">",
        available,
        seats.len()
    );

    for row in seats.chunk_by(|a, b| a.row_number == b.row_number) {
        let _ = write!(
            page,
            "<div class=\"row\"><span class=\"row-label\">Row {}</span>",
            row[0].row_number
        );
        for seat in row {
            let class = if seat.is_available() { "available" } else { "reserved" };
            let _ = write!(
                page,
                "<span class=\"seat {}\" title=\"{}\">{}</span>",
                class,
                seat.label(),
                seat.seat_number
            );
        }
        page.push_str("</div>\n");
    }

    page.push_str("</div>\n</body>\n</html>\n");
    Html(page)
}
