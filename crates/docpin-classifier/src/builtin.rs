//! Built-in rule batteries for the built-in catalog

use crate::{Predicate as P, RuleBattery, RuleRegistry};
use docpin_domain::ContentKind;

/// Registry with the script, markup and styling batteries
pub fn builtin_registry() -> RuleRegistry {
    RuleRegistry::new()
        .with_battery(ContentKind::Script, script_battery())
        .with_battery(ContentKind::Markup, markup_battery())
        .with_battery(ContentKind::Styling, styling_battery())
}

fn script_battery() -> RuleBattery {
    RuleBattery::new()
        // Broad topics
        .rule(P::contains("array"), "array")
        .rule(
            P::contains_any(["string", "character", "palindrome", "vowel", "anagram"]),
            "string",
        )
        .rule(P::contains_any(["object", "property", "properties"]), "object")
        .rule(P::contains_any(["callback", "higher-order", "higher order"]), "functions")
        .rule(P::contains_any(["loop", "iterate", "iteration", "fizzbuzz"]), "loops")
        .rule(P::contains_any(["if statement", "conditional", "else"]), "conditionals")
        .rule(
            P::contains_any(["math.", "prime", "factorial", "fibonacci", "square root", "random number"]),
            "math",
        )
        .rule(P::contains_any(["recursion", "recursive"]), "recursion")
        .rule(P::contains("closure"), "closures")
        .rule(P::contains_any(["class ", "constructor", "inheritance", "prototype"]), "classes")
        .rule(P::contains("promise"), "promise")
        .rule(P::contains_any(["async", "await"]), "async-await")
        .rule(P::contains("json"), "json")
        .rule(
            P::any(vec![
                P::contains_any(["document.", "queryselector", "getelementbyid", "the dom"]),
                P::has_tag("dom"),
            ]),
            "dom",
        )
        .rule(P::contains_any(["addeventlistener", "click", "event"]), "events")
        .rule(P::contains_any(["fetch", "api request", "http"]), "fetch")
        .rule(P::contains_any(["regex", "regular expression", "regexp"]), "regexp")
        .rule(
            P::any(vec![
                P::contains_any(["new date", "date object", "timestamp", "calendar"]),
                P::has_tag("date"),
            ]),
            "date",
        )
        .rule(P::contains_any(["new set", "unique values", "duplicates"]), "set")
        .rule(P::contains_any(["new map", "hashmap", "hash map", "key-value"]), "map-object")
        .rule(P::contains("destructur"), "destructuring")
        .rule(P::contains_any(["spread", "rest parameter"]), "spread")
        .rule(P::contains_any(["template literal", "template string"]), "template-literals")
        .rule(
            P::contains_any(["try...catch", "try/catch", "throw", "exception", "error handling"]),
            "error-handling",
        )
        .rule(P::contains_any(["arrow function", "=>"]), "arrow-functions")
        .rule(P::contains("switch"), "switch")
        .rule(
            P::contains_any(["parseint", "parsefloat", "tofixed", "isnan", "integer"]),
            "number",
        )
        // Specific methods
        .rule(P::contains("map"), "array-map")
        .rule(P::contains("filter"), "array-filter")
        .rule(P::contains("reduce"), "array-reduce")
        .rule(P::contains("sort"), "array-sort")
        .rule(P::contains("foreach"), "array-foreach")
        .rule(P::contains_any([".find", "find(", "findindex"]), "array-find")
        .rule(P::contains("includes"), "array-includes")
        .rule(P::contains("split"), "string-split")
        .rule(P::contains("replace"), "string-replace")
        .rule(P::contains_any(["object.keys", "object.values"]), "object-keys")
        .rule(P::contains("object.entries"), "object-entries")
        .rule(
            P::any(vec![
                P::has_tag("sorting"),
                P::contains_any([
                    "bubble sort",
                    "merge sort",
                    "quick sort",
                    "quicksort",
                    "insertion sort",
                    "selection sort",
                ]),
            ]),
            "sorting-visualizer",
        )
}

fn markup_battery() -> RuleBattery {
    RuleBattery::new()
        .rule(P::Always, "html-elements")
        .rule(
            P::contains_any(["<header", "<footer", "<main", "<nav", "<section", "<article", "page structure"]),
            "html-document-structure",
        )
        .rule(P::contains("semantic"), "html-semantics")
        .rule(P::contains_any(["<form", "form ", "forms", "submit"]), "html-forms")
        .rule(
            P::contains_any(["<input", "input", "checkbox", "radio", "<select", "textarea"]),
            "html-input",
        )
        .rule(P::contains("table"), "html-table")
        .rule(P::contains_any(["<ul", "<ol", "<li", "list"]), "html-lists")
        .rule(P::contains_any(["<a ", "href", "link", "anchor"]), "html-links")
        .rule(P::contains_any(["<img", "image", "picture", "alt text"]), "html-images")
        .rule(
            P::contains_any(["<video", "<audio", "video", "audio", "iframe", "embed"]),
            "html-media",
        )
        .rule(
            P::contains_any(["<head", "<meta", "metadata", "<title", "favicon"]),
            "html-metadata",
        )
        .rule(
            P::contains_any(["accessib", "aria-", "a11y", "screen reader"]),
            "html-accessibility",
        )
}

fn styling_battery() -> RuleBattery {
    RuleBattery::new()
        .rule(P::Always, "css-reference")
        .rule(P::contains_any(["selector", "specificity", "combinator"]), "css-selectors")
        .rule(P::contains_any(["box model", "margin", "padding", "border"]), "css-box-model")
        .rule(P::contains("flex"), "css-flexbox")
        .rule(P::contains("grid"), "css-grid")
        .rule(
            P::contains_any(["position", "absolute", "relative", "sticky", "z-index"]),
            "css-positioning",
        )
        .rule(
            P::contains_any(["@media", "media quer", "responsive", "breakpoint"]),
            "css-media-queries",
        )
        .rule(P::contains_any(["color", "colour", "rgb", "hsl", "gradient"]), "css-colors")
        .rule(P::contains_any(["font", "text-", "typography", "line-height"]), "css-typography")
        .rule(
            P::contains_any(["background", "border-radius", "shadow"]),
            "css-backgrounds",
        )
        .rule(
            P::contains_any(["custom propert", "css variable", "var(--"]),
            "css-variables",
        )
        .rule(
            P::contains_any(["hover", "pseudo", ":focus", "nth-child"]),
            "css-pseudo-classes",
        )
        .rule(P::contains("transition"), "css-transitions")
        .rule(P::contains_any(["animation", "@keyframes", "keyframe", "animate"]), "css-animations")
        .rule(P::contains_any(["transform", "rotate", "scale", "translate"]), "css-transform")
}
