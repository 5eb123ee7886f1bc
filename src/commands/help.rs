pub fn usage() -> String {
    [
        "📖 tickerboard",
        "  <TICKER>    look up a stock (e.g. AAPL) and chart its last 60 daily closes",
        "  :refresh    reload the Bitcoin price and chart",
        "  :help       show this help message",
        "  :quit       exit",
        "Charts are written as PNG files to CHART_DIR (default: charts/).",
    ]
    .join("\n")
}
