use crate::parser::Parser;

/// Fixed sequence: invoke each parser in order and collect the values.
///
/// The first failure propagates and nothing is rolled back: the cursor
/// stays wherever the successful prefix left it. A caller that needs atomic
/// failure wraps the chain in `optional` or `choice`, which record and
/// restore the offset themselves.
pub fn chain<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<Vec<T>> {
    Parser::from_fn("chain", move |cursor| {
        parsers.iter().map(|parser| parser.apply(cursor)).collect()
    })
}
