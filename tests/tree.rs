use segtrie::{InsertError, SegmentError, Trie};

macro_rules! match_tests {
    ($($name:ident {
        patterns = $patterns:expr,
        $( $input:literal :: $pattern:literal =>
            $( $(@$none:tt)? None )?
            $( $(@$some:tt)? { $( $key:literal => $val:literal ),* $(,)? } )?
        ),* $(,)?
    }),* $(,)?) => { $(
        #[test]
        fn $name() {
            let mut trie = Trie::new();

            for pattern in $patterns {
                trie.insert(pattern, pattern.to_owned()).unwrap();
            }

            $(match trie.search($input) {
                Err(_) => {
                    $($( @$some )?
                        panic!("Expected value for input '{}'", $input)
                    )?
                }
                Ok(result) => {
                    $($( @$some )?
                        if result.value != $pattern {
                            panic!(
                                "Wrong value for input '{}'. Expected '{}', found '{}')",
                                $input, $pattern, result.value
                            );
                        }
                        assert_eq!(result.pattern, $pattern, "Wrong pattern for input '{}'", $input);

                        let expected_captures = vec![$(($key, $val)),*];
                        let got_captures = result.captures.iter().collect::<Vec<_>>();

                        assert_eq!(
                            got_captures, expected_captures,
                            "Wrong captures for input '{}'",
                            $input
                        );

                        trie.search_mut($input).unwrap().push_str("CHECKED");
                        assert!(trie.search($input).unwrap().value.contains("CHECKED"));

                        let val = trie.search_mut($input).unwrap();
                        *val = val.replace("CHECKED", "");
                    )?

                    $($( @$none )?
                        panic!(
                            "Unexpected value for input '{}', got: {:?}",
                            $input,
                            result.captures.iter().collect::<Vec<_>>()
                        );
                    )?
                }
            })*
        }
   )* };
}

macro_rules! insert_tests {
    ($($name:ident {
        $($pattern:literal => $res:expr),* $(,)?
    }),* $(,)?) => { $(
        #[test]
        fn $name() {
            let mut trie = Trie::new();

            $(
                let res = trie.insert($pattern, $pattern.to_owned());
                assert_eq!(res, $res, "unexpected result for pattern '{}'", $pattern);
            )*
        }
   )* };
}

fn conflict(pattern: &str, with: &str) -> InsertError {
    InsertError::PlaceholderConflict {
        pattern: pattern.into(),
        with: with.into(),
    }
}

fn duplicate(pattern: &str) -> InsertError {
    InsertError::Duplicate {
        pattern: pattern.into(),
    }
}

match_tests! {
    basic {
        patterns = [
            "/hi",
            "/contact",
            "/co",
            "/c",
            "/a",
            "/ab",
            "/doc/",
            "/doc/rust_faq.html",
            "/doc/rust1.26.html",
            "/ʯ",
            "/β",
        ],
        "/a"       :: "/a"       => {},
        "/"        :: ""         => None,
        "/hi"      :: "/hi"      => {},
        "/contact" :: "/contact" => {},
        "/co"      :: "/co"      => {},
        "/con"     :: ""         => None,
        "/cona"    :: ""         => None,
        "/no"      :: ""         => None,
        "/ab"      :: "/ab"      => {},
        "/doc"     :: ""         => None,
        "/doc/"    :: "/doc/"    => {},
        "/ʯ"       :: "/ʯ"       => {},
        "/β"       :: "/β"       => {}
    },
    wildcard {
        patterns = [
            "/",
            "/cmd/:tool/:sub",
            "/cmd/:tool",
            "/cmd/whoami",
            "/cmd/whoami/root",
            "/src/*filepath",
            "/search",
            "/search/:query",
            "/search/actix-web",
            "/search/google",
            "/user_:name",
            "/files/:dir/*filepath",
            "/info/:user/public",
            "/info/:user/project/:project",
            "/info/:user/project/rustlang",
        ],
        "/"                                 :: "/"                            => {},
        "/cmd/test"                         :: "/cmd/:tool"                   => { "tool" => "test" },
        "/cmd/test/"                        :: ""                             => None,
        "/cmd/test/3"                       :: "/cmd/:tool/:sub"              => { "tool" => "test", "sub" => "3" },
        "/cmd/whoami"                       :: "/cmd/whoami"                  => {},
        "/cmd/whoami/"                      :: ""                             => None,
        "/cmd/whoami/r"                     :: "/cmd/:tool/:sub"              => { "tool" => "whoami", "sub" => "r" },
        "/cmd/whoami/root"                  :: "/cmd/whoami/root"             => {},
        "/cmd/whoami/root/"                 :: ""                             => None,
        "/src/"                             :: ""                             => None,
        "/src/some/file.png"                :: "/src/*filepath"               => { "filepath" => "some/file.png" },
        "/search"                           :: "/search"                      => {},
        "/search/"                          :: ""                             => None,
        "/search/actix"                     :: "/search/:query"               => { "query" => "actix" },
        "/search/actix-web"                 :: "/search/actix-web"            => {},
        "/search/google"                    :: "/search/google"               => {},
        "/search/someth!ng+in+ünìcodé"      :: "/search/:query"               => { "query" => "someth!ng+in+ünìcodé" },
        "/search/someth!ng+in+ünìcodé/"     :: ""                             => None,
        "/user_:name"                       :: "/user_:name"                  => {},
        "/user_rustacean"                   :: ""                             => None,
        "/files/js/inc/framework.js"        :: "/files/:dir/*filepath"        => { "dir" => "js", "filepath" => "inc/framework.js" },
        "/info/gordon/public"               :: "/info/:user/public"           => { "user" => "gordon" },
        "/info/gordon/project/rust"         :: "/info/:user/project/:project" => { "user" => "gordon", "project" => "rust" },
        "/info/gordon/project/rustlang"     :: "/info/:user/project/rustlang" => { "user" => "gordon" },
    },
    backtracking {
        patterns = [
            "/:cc",
            "/:cc/cc",
            "/c1/:dd/e",
            "/c1/:dd/e1",
            "/:cc/:dd/ee",
            "/:cc/:dd/:ee/ff",
        ],
        "/a"           :: "/:cc"            => { "cc" => "a" },
        "/all"         :: "/:cc"            => { "cc" => "all" },
        "/c1"          :: "/:cc"            => { "cc" => "c1" },
        "/all/cc"      :: "/:cc/cc"         => { "cc" => "all" },
        "/c1/cc"       :: "/:cc/cc"         => { "cc" => "c1" },
        "/c1/d/e"      :: "/c1/:dd/e"       => { "dd" => "d" },
        "/c1/d/e1"     :: "/c1/:dd/e1"      => { "dd" => "d" },
        "/c1/d/ee"     :: "/:cc/:dd/ee"     => { "cc" => "c1", "dd" => "d" },
        "/c/d/ee"      :: "/:cc/:dd/ee"     => { "cc" => "c", "dd" => "d" },
        "/c1/d/e/ff"   :: "/:cc/:dd/:ee/ff" => { "cc" => "c1", "dd" => "d", "ee" => "e" },
        "/c1/d/e2"     :: ""                => None,
        "/c/d/e/f/gg"  :: ""                => None,
        "/"            :: ""                => None,
    },
    many_captures {
        patterns = [
            "/:a/:b/:c/:d/:e",
            "/:a/:b/:c/:d/:e/*rest",
        ],
        "/1/2/3/4/5"       :: "/:a/:b/:c/:d/:e"       => { "a" => "1", "b" => "2", "c" => "3", "d" => "4", "e" => "5" },
        "/1/2/3/4/5/6/7"   :: "/:a/:b/:c/:d/:e/*rest" => { "a" => "1", "b" => "2", "c" => "3", "d" => "4", "e" => "5", "rest" => "6/7" },
        "/1/2/3/4"         :: ""                      => None,
        "/1/2/3/4/5/"      :: ""                      => None,
    },
    compression {
        patterns = ["/abc/bcd", "/abcd/bcd", "/users/:id", "/users/new"],
        "/abc/bcd"  :: "/abc/bcd"   => {},
        "/abcd/bcd" :: "/abcd/bcd"  => {},
        "/abc"      :: ""           => None,
        "/abc/"     :: ""           => None,
        "/abcd"     :: ""           => None,
        "/users/42" :: "/users/:id" => { "id" => "42" },
        "/users/new":: "/users/new" => {},
        "/users/ne" :: "/users/:id" => { "id" => "ne" },
        "/users/"   :: ""           => None,
    },
    empty_capture {
        patterns = ["/users/:id/posts", "/users/:id", "/files/:dir/*path"],
        "/users//posts"    :: "/users/:id/posts"  => { "id" => "" },
        "/users/42/posts"  :: "/users/:id/posts"  => { "id" => "42" },
        "/users/42"        :: "/users/:id"        => { "id" => "42" },
        "/users/"          :: ""                  => None,
        "/users//"         :: ""                  => None,
        "/files//a/b"      :: "/files/:dir/*path" => { "dir" => "", "path" => "a/b" },
        "/files/x/"        :: ""                  => None,
    },
    unclean_patterns {
        patterns = ["/a//b", "/doc/", "/x/./y", "/users//:id/"],
        "/a//b"         :: "/a//b"        => {},
        "/a/b"          :: ""             => None,
        "/doc/"         :: "/doc/"        => {},
        "/doc"          :: ""             => None,
        "/x/./y"        :: "/x/./y"       => {},
        "/users//42/"   :: "/users//:id/" => { "id" => "42" },
        "/users///"     :: "/users//:id/" => { "id" => "" },
    },
    empty_pattern {
        patterns = ["", "/", "/x"],
        ""   :: ""   => {},
        "/"  :: "/"  => {},
        "/x" :: "/x" => {},
    },
}

insert_tests! {
    wildcard_conflict {
        "/cmd/:tool/:sub"     => Ok(()),
        "/cmd/vet"            => Ok(()),
        "/foo/bar"            => Ok(()),
        "/foo/:name"          => Ok(()),
        "/foo/:names"         => Err(conflict("/foo/:names", "/foo/:name")),
        "/cmd/*path"          => Err(conflict("/cmd/*path", "/cmd/:tool/:sub")),
        "/cmd/:badvar"        => Err(conflict("/cmd/:badvar", "/cmd/:tool/:sub")),
        "/cmd/:tool/names"    => Ok(()),
        "/cmd/:tool/:bad/foo" => Err(conflict("/cmd/:tool/:bad/foo", "/cmd/:tool/:sub")),
        "/src/*filepath"      => Ok(()),
        "/src/:file"          => Err(conflict("/src/:file", "/src/*filepath")),
        "/src/static.json"    => Ok(()),
        "/src/"               => Ok(()),
        "/search/:query"      => Ok(()),
        "/search/valid"       => Ok(()),
        "/user_:name"         => Ok(()),
        "/user_x"             => Ok(()),
        "/user_:bar"          => Ok(()),
        "/id/:id"             => Ok(()),
    },
    child_conflict {
        "/cmd/vet"        => Ok(()),
        "/cmd/:tool"      => Ok(()),
        "/cmd/:tool/:sub" => Ok(()),
        "/cmd/:tool/misc" => Ok(()),
        "/cmd/:tool/:bad" => Err(conflict("/cmd/:tool/:bad", "/cmd/:tool/:sub")),
        "/src/AUTHORS"    => Ok(()),
        "/src/*filepath"  => Ok(()),
        "/:id"            => Ok(()),
        "/*filepath"      => Err(conflict("/*filepath", "/:id")),
    },
    duplicates {
        "/"              => Ok(()),
        "/"              => Err(duplicate("/")),
        "/doc/"          => Ok(()),
        "/doc/"          => Err(duplicate("/doc/")),
        "/doc"           => Ok(()),
        "/src/*filepath" => Ok(()),
        "/src/*filepath" => Err(duplicate("/src/*filepath")),
        "/search/:query" => Ok(()),
        "/search/:query" => Err(duplicate("/search/:query")),
        "/user_:name"    => Ok(()),
        "/user_:name"    => Err(duplicate("/user_:name")),
        ""               => Ok(()),
        ""               => Err(duplicate("")),
    },
    unnamed_placeholder {
        "/user/:"  => Err(InsertError::Segment(SegmentError::UnnamedPlaceholder("/user/:".into()))),
        "/cmd/:/"  => Err(InsertError::Segment(SegmentError::UnnamedPlaceholder("/cmd/:/".into()))),
        "/src/*"   => Err(InsertError::Segment(SegmentError::UnnamedPlaceholder("/src/*".into()))),
        "/user:"   => Ok(()),
    },
    invalid_catchall {
        "/src/*filepath/x"  => Err(InsertError::Segment(SegmentError::InvalidCatchAll("/src/*filepath/x".into()))),
        "/src2/"            => Ok(()),
        "/src2/*filepath/x" => Err(InsertError::Segment(SegmentError::InvalidCatchAll("/src2/*filepath/x".into()))),
    },
    malformed_pattern {
        "users" => Err(InsertError::Segment(SegmentError::MissingLeadingSlash("users".into()))),
        "*x"    => Err(InsertError::Segment(SegmentError::MissingLeadingSlash("*x".into()))),
    },
    more_conflicts {
        "/who/are/*you"       => Ok(()),
        "/who/foo/hello"      => Ok(()),
        "/whose/:users/:name" => Ok(()),
        "/who/are/foo"        => Ok(()),
        "/who/are/foo/bar"    => Ok(()),
        "/whose/:users/:user" => Err(conflict("/whose/:users/:user", "/whose/:users/:name")),
        "/whose/:group/:user" => Err(conflict("/whose/:group/:user", "/whose/:users/:name")),
    },
}
