use url::Url;
use worldbank_api::{Filter, Frequency, MostRecentValues, PageParams};

fn base() -> Url {
    Url::parse("https://api.worldbank.org/v2/countries/all/indicators/SP.POP.TOTL?format=json")
        .unwrap()
}

#[test]
fn date_range_round_trips_with_escaped_colon() {
    let mut url = base();
    let filter = Filter::DateRange {
        start: "2018".into(),
        end: "2019".into(),
    };
    filter.add_to_url(&mut url).unwrap();
    assert_eq!(url.query().unwrap(), "format=json&date=2018%3A2019");
}

#[test]
fn encoder_order_does_not_change_individual_pairs() {
    let pages = PageParams::new(1, 100);
    let filter = Filter::DateRange {
        start: "2018".into(),
        end: "2019".into(),
    };

    let mut pages_first = base();
    pages.add_to_url(&mut pages_first).unwrap();
    filter.add_to_url(&mut pages_first).unwrap();

    let mut filter_first = base();
    filter.add_to_url(&mut filter_first).unwrap();
    pages.add_to_url(&mut filter_first).unwrap();

    for url in [&pages_first, &filter_first] {
        let query = url.query().unwrap();
        assert!(query.contains("date=2018%3A2019"), "query: {query}");
        assert!(query.contains("page=1"), "query: {query}");
        assert!(query.contains("per_page=100"), "query: {query}");
    }

    assert_eq!(
        pages_first.query().unwrap(),
        "format=json&page=1&per_page=100&date=2018%3A2019"
    );
    assert_eq!(
        filter_first.query().unwrap(),
        "format=json&date=2018%3A2019&page=1&per_page=100"
    );
}

#[test]
fn encoders_are_deterministic_across_calls() {
    let filter = Filter::MostRecent(MostRecentValues {
        frequency: Frequency::Quarterly,
        count: 4,
        non_empty: true,
        gap_fill: false,
    });

    let mut first = base();
    filter.add_to_url(&mut first).unwrap();
    let mut second = base();
    filter.add_to_url(&mut second).unwrap();
    assert_eq!(first.as_str(), second.as_str());
    assert_eq!(first.query().unwrap(), "format=json&frequency=Q&mrnev=4");
}
